// Copyright 2023-2024, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/cargo-stylus/blob/main/licenses/COPYRIGHT.md

use crate::{
    bindings::BindingGenerator,
    constants::{BYTECODE_ARTIFACT_EXT, INTERFACE_ARTIFACT_EXT, METADATA_FILE_SUFFIX},
    error::WriteError,
    metadata::RemoteContractMetadata,
    templates::MetadataTemplate,
};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

/// Persists a contract's artifacts, bindings and generated metadata file.
pub struct MetadataWriter<B> {
    artifacts_dir: PathBuf,
    metadata_out: PathBuf,
    bindings: B,
}

impl<B: BindingGenerator> MetadataWriter<B> {
    pub fn new(
        artifacts_dir: impl Into<PathBuf>,
        metadata_out: impl Into<PathBuf>,
        bindings: B,
    ) -> Self {
        Self {
            artifacts_dir: artifacts_dir.into(),
            metadata_out: metadata_out.into(),
            bindings,
        }
    }

    pub fn bindings(&self) -> &B {
        &self.bindings
    }

    /// Where `name`'s metadata file is written.
    pub fn metadata_path(&self, name: &str) -> PathBuf {
        let file = format!("{}{METADATA_FILE_SUFFIX}", name.to_lowercase());
        self.metadata_out.join(file)
    }

    /// Writes artifacts, generates bindings and renders `template`, returning the
    /// metadata file's path.
    ///
    /// The metadata file is truncated, never appended to. Artifacts left behind by a
    /// failure are not cleaned up.
    pub fn write_all_outputs(
        &self,
        metadata: &RemoteContractMetadata,
        template: MetadataTemplate,
    ) -> Result<PathBuf, WriteError> {
        let name = &metadata.name;
        let (interface_path, bytecode_path) = write_contract_artifacts(
            &self.artifacts_dir,
            name,
            metadata.interface_json.as_bytes(),
            metadata.init_bin.as_bytes(),
        )?;

        let bindings_path = self
            .bindings
            .generate(&interface_path, &bytecode_path, &metadata.package_name, name)
            .map_err(|source| WriteError::Bindings {
                name: name.clone(),
                interface_path: interface_path.clone(),
                bytecode_path: bytecode_path.clone(),
                source,
            })?;
        tracing::debug!(contract = %name, path = %bindings_path.display(), "generated bindings");

        let path = self.metadata_path(name);
        let mut file = File::create(&path).map_err(|source| WriteError::Open {
            name: name.clone(),
            path: path.clone(),
            source,
        })?;
        file.write_all(template.render(metadata).as_bytes())
            .map_err(|source| WriteError::Render {
                name: name.clone(),
                path: path.clone(),
                source,
            })?;

        tracing::debug!(contract = %name, path = %path.display(), "wrote contract metadata");
        Ok(path)
    }
}

/// Writes `<name>.abi` and `<name>.bin` into `dir`, returning their paths.
pub fn write_contract_artifacts(
    dir: &Path,
    name: &str,
    interface: &[u8],
    init_bytecode: &[u8],
) -> Result<(PathBuf, PathBuf), WriteError> {
    let interface_path = dir.join(format!("{name}.{INTERFACE_ARTIFACT_EXT}"));
    let bytecode_path = dir.join(format!("{name}.{BYTECODE_ARTIFACT_EXT}"));
    for (path, contents) in [(&interface_path, interface), (&bytecode_path, init_bytecode)] {
        fs::write(path, contents).map_err(|source| WriteError::Artifacts {
            name: name.to_owned(),
            path: path.clone(),
            source,
        })?;
    }
    Ok((interface_path, bytecode_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::BindingError, testing::RecordingBindings};
    use tempfile::TempDir;

    fn foo() -> RemoteContractMetadata {
        RemoteContractMetadata {
            name: "Foo".into(),
            package_name: "bindings".into(),
            interface_json: "[]".into(),
            deployed_bin: "0x6080".into(),
            init_bin: "0x6040".into(),
            ..Default::default()
        }
    }

    #[test]
    fn writes_artifacts_bindings_and_metadata() {
        let artifacts = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let writer = MetadataWriter::new(artifacts.path(), out.path(), RecordingBindings::default());

        let path = writer
            .write_all_outputs(&foo(), MetadataTemplate::Standard)
            .unwrap();
        assert_eq!(path, out.path().join("foo_more.rs"));
        assert_eq!(
            fs::read_to_string(artifacts.path().join("Foo.abi")).unwrap(),
            "[]"
        );
        assert_eq!(
            fs::read_to_string(artifacts.path().join("Foo.bin")).unwrap(),
            "0x6040"
        );

        let requests = writer.bindings().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].package, "bindings");
        assert_eq!(requests[0].name, "Foo");
        assert_eq!(requests[0].bytecode, "0x6040");

        let text = fs::read_to_string(path).unwrap();
        assert!(text.contains(r#"pub const FooDeployedBin: &str = "0x6080";"#));
    }

    #[test]
    fn metadata_file_is_truncated() {
        let artifacts = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let writer = MetadataWriter::new(artifacts.path(), out.path(), RecordingBindings::default());

        let path = writer.metadata_path("Foo");
        fs::write(&path, "x".repeat(10_000)).unwrap();
        writer
            .write_all_outputs(&foo(), MetadataTemplate::Standard)
            .unwrap();
        let text = fs::read_to_string(path).unwrap();
        assert!(!text.contains("xxx"));
        assert_eq!(text, MetadataTemplate::Standard.render(&foo()));
    }

    #[test]
    fn binding_failures_skip_rendering() {
        let artifacts = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let writer = MetadataWriter::new(artifacts.path(), out.path(), RecordingBindings::failing());

        let err = writer
            .write_all_outputs(&foo(), MetadataTemplate::Standard)
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Foo.abi") && msg.contains("Foo.bin"));
        match err {
            WriteError::Bindings {
                name,
                interface_path,
                bytecode_path,
                source,
            } => {
                assert_eq!(name, "Foo");
                assert_eq!(interface_path, artifacts.path().join("Foo.abi"));
                assert_eq!(bytecode_path, artifacts.path().join("Foo.bin"));
                assert!(matches!(source, BindingError::Bytecode { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
        // artifacts stay behind, the metadata file is never created
        assert!(artifacts.path().join("Foo.abi").exists());
        assert!(!writer.metadata_path("Foo").exists());
    }

    #[test]
    fn missing_directories_are_reported_with_paths() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");

        let err = write_contract_artifacts(&missing, "Foo", b"[]", b"").unwrap_err();
        assert!(err.to_string().contains("Foo"));
        assert!(matches!(err, WriteError::Artifacts { .. }));

        let writer = MetadataWriter::new(dir.path(), &missing, RecordingBindings::default());
        let err = writer
            .write_all_outputs(&foo(), MetadataTemplate::Standard)
            .unwrap_err();
        assert!(matches!(err, WriteError::Open { .. }));
        assert!(err.to_string().contains("foo_more.rs"));
    }
}
