//! Stand-in application executable that records how it was started.

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

/// Write a shell script that dumps its arguments and environment to `record`.
#[cfg(unix)]
pub(crate) fn install(dir: &Path, record: &Path) -> PathBuf {
    let script = dir.join("fake-dcc.sh");
    let content = format!(
        "#!/bin/sh\n{{ echo \"ARGS=$*\"; env; }} > '{}.tmp'\nmv '{}.tmp' '{}'\n",
        record.display(),
        record.display(),
        record.display()
    );
    fs::write(&script, content).expect("Failed to write fake dcc");
    let mut permissions = fs::metadata(&script).expect("fake dcc metadata").permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(&script, permissions).expect("Failed to make fake dcc executable");
    script
}

/// Wait for the fake application to write its record; launches are not awaited.
pub(crate) fn wait_for_record(record: &Path) -> String {
    let deadline = Instant::now() + Duration::from_secs(10);
    while Instant::now() < deadline {
        if let Ok(content) = fs::read_to_string(record) {
            return content;
        }
        thread::sleep(Duration::from_millis(50));
    }
    panic!("fake application never wrote {}", record.display());
}
