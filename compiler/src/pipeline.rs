//! End-to-end driver: validate → parse → build → render → emit.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::GenError;
use crate::gen_php::{render_constants, RenderOptions};
use crate::model::SchemaModel;
use crate::parser::parse_schema;

#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Path to the schema document.
    pub input: PathBuf,
    /// Destination file; `None` means the caller prints the rendered text to
    /// stdout and no filesystem side effect occurs.
    pub output: Option<PathBuf>,
    pub prefix: String,
    pub namespace: String,
    pub class_name: String,
}

#[derive(Debug)]
pub struct GenerateOutcome {
    /// Number of distinct keys in the model. Zero is a success, not an error.
    pub key_count: usize,
    /// Set when the artifact was written to a file.
    pub written_to: Option<PathBuf>,
    pub rendered: String,
}

/// Runs the whole pipeline for one request. Everything up to emitting is a
/// pure function of the input document; only the final write touches disk.
pub fn run(request: &GenerateRequest) -> Result<GenerateOutcome, GenError> {
    // -- Validating
    let xml = fs::read_to_string(&request.input).map_err(|err| {
        GenError::Input(format!(
            "cannot read schema file \"{}\": {}",
            request.input.display(),
            err
        ))
    })?;
    if let Some(output) = &request.output {
        prepare_output_dir(output)?;
    }

    // -- Parsing / Building
    let raw = parse_schema(&xml)?;
    let model = SchemaModel::from_raw(raw);

    // -- Rendering
    let opts = RenderOptions {
        prefix: request.prefix.clone(),
        namespace: request.namespace.clone(),
        class_name: request.class_name.clone(),
        generated_at: Some(Local::now().format("%Y-%m-%d %H:%M:%S").to_string()),
    };
    let rendered = render_constants(&model, &opts);

    // -- Emitting
    let written_to = match &request.output {
        Some(path) => {
            fs::write(path, &rendered).map_err(|err| {
                GenError::Emit(format!("cannot write \"{}\": {}", path.display(), err))
            })?;
            Some(path.clone())
        }
        None => None,
    };

    Ok(GenerateOutcome {
        key_count: model.len(),
        written_to,
        rendered,
    })
}

/// Creates the destination directory if needed and rejects unwritable ones
/// before any parsing work happens.
fn prepare_output_dir(output: &Path) -> Result<(), GenError> {
    let dir = match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => return Ok(()), // bare filename, current directory
    };

    fs::create_dir_all(dir).map_err(|err| {
        GenError::OutputTarget(format!(
            "cannot create output directory \"{}\": {}",
            dir.display(),
            err
        ))
    })?;

    let meta = fs::metadata(dir).map_err(|err| {
        GenError::OutputTarget(format!(
            "cannot inspect output directory \"{}\": {}",
            dir.display(),
            err
        ))
    })?;
    if meta.permissions().readonly() {
        return Err(GenError::OutputTarget(format!(
            "output directory \"{}\" is not writable",
            dir.display()
        )));
    }

    Ok(())
}
