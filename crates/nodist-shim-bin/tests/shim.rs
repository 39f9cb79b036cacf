use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::{TempDir, tempdir};

const SHIM: &str = env!("CARGO_BIN_EXE_node");

struct Fixture {
    _root:   TempDir,
    prefix:  PathBuf,
    project: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let root = tempdir().unwrap();
        let prefix = root.path().join("nodist");
        let project = root.path().join("project");
        std::fs::create_dir_all(&prefix).unwrap();
        std::fs::create_dir_all(&project).unwrap();
        Self {
            _root: root,
            prefix,
            project,
        }
    }

    fn install_dir(&self, tree: &str, version: &str) -> PathBuf {
        let dir = self.prefix.join(tree).join(version);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// A fake `node` that prints its version and arguments, then exits with
    /// `$FAKE_EXIT` (default 0).
    #[cfg(unix)]
    fn install(&self, tree: &str, version: &str) {
        use std::os::unix::fs::PermissionsExt;

        let bin = self.install_dir(tree, version).join("node");
        let script = format!("#!/bin/sh\necho \"{version} $*\"\nexit ${{FAKE_EXIT:-0}}\n");
        std::fs::write(&bin, script).unwrap();
        std::fs::set_permissions(&bin, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn shim(&self) -> Command {
        let mut cmd = Command::new(SHIM);
        cmd.current_dir(&self.project)
            .env("NODIST_PREFIX", &self.prefix)
            .env_remove("NODE_VERSION")
            .env_remove("NODIST_VERSION")
            .env_remove("NODIST_X64")
            .env_remove("NODIST_LOG");
        cmd
    }

    fn write(&self, path: impl AsRef<Path>, content: &str) {
        let path = self.project.join(path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }
}

fn stdout(output: &Output) -> String { String::from_utf8_lossy(&output.stdout).into_owned() }

#[test]
fn test_missing_prefix() {
    let fx = Fixture::new();
    let output = fx.shim().env_remove("NODIST_PREFIX").output().unwrap();
    assert_eq!(output.status.code(), Some(40));
    assert!(String::from_utf8_lossy(&output.stderr).contains("NODIST_PREFIX"));
}

#[test]
fn test_undecided_without_any_spec() {
    let fx = Fixture::new();
    fx.install_dir("v", "10.2.0");
    let output = fx.shim().output().unwrap();
    assert_eq!(output.status.code(), Some(41));
    assert!(String::from_utf8_lossy(&output.stderr).contains("couldn't decide"));
}

#[test]
fn test_blank_overrides_are_undecided() {
    let fx = Fixture::new();
    fx.install_dir("v", "10.2.0");
    let output = fx
        .shim()
        .env("NODE_VERSION", "  ")
        .env("NODIST_VERSION", "v")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(41));
}

#[test]
fn test_malformed_spec_before_catalog() {
    let fx = Fixture::new();
    let output = fx.shim().env("NODE_VERSION", "not-a-version").output().unwrap();
    assert_eq!(output.status.code(), Some(43));
}

#[test]
fn test_catalog_unreadable() {
    let fx = Fixture::new();
    let output = fx.shim().env("NODE_VERSION", "10").output().unwrap();
    assert_eq!(output.status.code(), Some(44));
}

#[test]
fn test_no_match() {
    let fx = Fixture::new();
    fx.install_dir("v", "10.2.0");
    fx.install_dir("v", "10.1.0");
    let output = fx.shim().env("NODE_VERSION", ">20.0.0").output().unwrap();
    assert_eq!(output.status.code(), Some(45));
}

#[test]
fn test_delegation_failure() {
    let fx = Fixture::new();
    fx.install_dir("v", "10.2.0");
    let output = fx.shim().env("NODE_VERSION", "10.2.0").output().unwrap();
    assert_eq!(output.status.code(), Some(42));
}

#[test]
fn test_global_marker_decides() {
    let fx = Fixture::new();
    fx.install_dir("v", "10.2.0");
    std::fs::write(fx.prefix.join(".node-version"), "  v10.2.0 \n").unwrap();
    // Decided and matched, so the only thing left to fail is the missing binary.
    let output = fx.shim().output().unwrap();
    assert_eq!(output.status.code(), Some(42));
}

#[cfg(unix)]
mod unix {
    use super::*;

    #[test]
    fn test_exit_code_mirrored() {
        let fx = Fixture::new();
        fx.install("v", "10.2.0");
        let output = fx
            .shim()
            .env("NODE_VERSION", "latest")
            .env("FAKE_EXIT", "7")
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(7));
        assert_eq!(stdout(&output), "10.2.0 \n");
    }

    #[test]
    fn test_arguments_forwarded() {
        let fx = Fixture::new();
        fx.install("v", "10.2.0");
        let output = fx
            .shim()
            .env("NODE_VERSION", "10")
            .args(["app.js", "--port", "8080"])
            .output()
            .unwrap();
        assert!(output.status.success());
        assert_eq!(stdout(&output), "10.2.0 app.js --port 8080\n");
    }

    #[test]
    fn test_manifest_next_to_target_script() {
        let fx = Fixture::new();
        fx.install("v", "10.2.0");
        fx.install("v", "9.5.0");
        fx.write(".node-version", "10.2.0");
        fx.write("server/package.json", r#"{"engines":{"node":"^9"}}"#);

        let output = fx.shim().arg("server/index.js").output().unwrap();
        assert_eq!(stdout(&output), "9.5.0 server/index.js\n");

        // From the project directory the manifest is out of reach.
        let output = fx.shim().arg("index.js").output().unwrap();
        assert_eq!(stdout(&output), "10.2.0 index.js\n");
    }

    #[test]
    fn test_env_override_beats_files() {
        let fx = Fixture::new();
        fx.install("v", "10.2.0");
        fx.install("v", "9.5.0");
        fx.write(".node-version", "10.2.0");
        fx.write("package.json", r#"{"engines":{"node":"^10"}}"#);

        let output = fx.shim().env("NODE_VERSION", "9").output().unwrap();
        assert_eq!(stdout(&output), "9.5.0 \n");
    }

    #[test]
    fn test_x64_tree() {
        let fx = Fixture::new();
        fx.install("v", "10.2.0");
        fx.install("v-x64", "9.5.0");
        let output = fx
            .shim()
            .env("NODE_VERSION", "latest")
            .env("NODIST_X64", "1")
            .output()
            .unwrap();
        assert_eq!(stdout(&output), "9.5.0 \n");
    }

    #[test]
    fn test_unreadable_marker_is_fatal() {
        let fx = Fixture::new();
        fx.install_dir("v", "10.2.0");
        std::fs::write(fx.prefix.join(".node-version"), "10.2.0").unwrap();
        std::fs::create_dir(fx.project.join(".node-version")).unwrap();

        let output = fx.shim().output().unwrap();
        assert_eq!(output.status.code(), Some(41));
        // The io error shows once, as the cause.
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("failed to read"));
        assert_eq!(stderr.matches("os error").count(), 1);
    }

    #[test]
    fn test_signal_mirrored() {
        use std::os::unix::process::ExitStatusExt;

        let fx = Fixture::new();
        let bin = fx.install_dir("v", "10.2.0").join("node");
        std::fs::write(&bin, "#!/bin/sh\nkill -TERM $$\n").unwrap();
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&bin, std::fs::Permissions::from_mode(0o755)).unwrap();
        }

        let output = fx.shim().env("NODE_VERSION", "10").output().unwrap();
        assert_eq!(output.status.signal(), Some(15));
    }
}
