use std::fs;
use std::path::{Path, PathBuf};

pub const DEPRECATED_BUILDER: &str = r#"package org.opendaylight.yang.gen.v1.http.org.openroadm.device;

public class InterfaceBuilder {
    @Deprecated
    public InterfaceBuilder setKey(InterfaceKey key) {
        return this;
    }
}
"#;

pub const CLEAN_BUILDER: &str = r#"package org.opendaylight.yang.gen.v1.http.org.openroadm.device;

public class PortBuilder {
    public PortBuilder setName(String name) {
        return this;
    }
}
"#;

/// Write `content` to `root/relative`, creating parent directories.
pub fn write_source(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}
