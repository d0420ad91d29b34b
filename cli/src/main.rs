use clap::Parser;
use std::path::{Path, PathBuf};

use confgen_compiler::error::GenError;
use confgen_compiler::pipeline::{run, GenerateRequest};

/// Class name used when writing to stdout, where no filename can supply one.
const FALLBACK_CLASS_NAME: &str = "PluginConstants";

#[derive(Parser)]
#[command(name = "confgen")]
#[command(about = "Generate a documented PHP constants file from a plugin config.xml", long_about = None)]
struct Cli {
    /// Path to the plugin config.xml file
    input: PathBuf,

    /// Path for the generated PHP file (e.g. src/Config/PluginConstants.php);
    /// omit to print the generated code to stdout
    output: Option<PathBuf>,

    /// Prefix for the constant values (e.g. "MyPlugin.system.config.")
    #[arg(short, long, default_value = "")]
    prefix: String,

    /// Class name for the generated file; defaults to the output filename
    #[arg(long)]
    class_name: Option<String>,

    /// Namespace for the generated file
    #[arg(long, default_value = "App\\Config")]
    namespace: String,
}

fn main() -> Result<(), GenError> {
    let cli = Cli::parse();

    let class_name = cli
        .class_name
        .clone()
        .unwrap_or_else(|| default_class_name(cli.output.as_deref()));

    let request = GenerateRequest {
        input: cli.input,
        output: cli.output,
        prefix: cli.prefix,
        namespace: cli.namespace,
        class_name,
    };

    // Progress goes to stderr so a stdout artifact stays pipeable.
    eprintln!("Generating config constants");
    eprintln!();
    print_settings(&request);
    eprintln!();

    let outcome = run(&request)?;

    if outcome.key_count == 0 {
        eprintln!("Warning: no <input-field>/<name> elements found in the schema document.");
    }
    eprintln!("Found {} unique configuration keys.", outcome.key_count);

    match &outcome.written_to {
        Some(path) => eprintln!("Successfully generated constants file at: {}", path.display()),
        None => print!("{}", outcome.rendered),
    }

    Ok(())
}

fn print_settings(request: &GenerateRequest) {
    let output = request
        .output
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(stdout)".to_string());
    let prefix = if request.prefix.is_empty() {
        "(none)".to_string()
    } else {
        request.prefix.clone()
    };

    let rows = [
        ("Source XML", request.input.display().to_string()),
        ("Output", output),
        ("Prefix", prefix),
        ("Namespace", request.namespace.clone()),
        ("Class Name", request.class_name.clone()),
    ];
    for (label, value) in rows {
        eprintln!("  {:<11} {}", label, value);
    }
}

fn default_class_name(output: Option<&Path>) -> String {
    output
        .and_then(|p| p.file_stem())
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_CLASS_NAME.to_string())
}
