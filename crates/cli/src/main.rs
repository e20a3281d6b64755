// SheetLink CLI - host-side harness for after-calculation hooks.
// Loads a calculation request from JSON, dispatches the registered hooks,
// and prints the annotated response plus the hook outcome.

mod exit_codes;

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Deserialize;

use sheetlink_calc::{CalculationRequest, CalculationResponse, OutputField};
use sheetlink_hooks::{ContactSyncHook, HookRegistry};
use sheetlink_hubspot::{
    config_file_path, save_config, HubSpotClient, HubSpotConfig, DEFAULT_API_BASE,
};

use exit_codes::{
    EXIT_ERROR, EXIT_HOOK_FAILED, EXIT_IO, EXIT_NOT_AUTH, EXIT_PARSE, EXIT_SUCCESS, EXIT_USAGE,
};

#[derive(Parser)]
#[command(name = "sheetlink")]
#[command(about = "Run after-calculation hooks against a calculation request")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the registered hooks against a request JSON file
    #[command(after_help = "\
Examples:
  sheetlink run request.json
  cat request.json | sheetlink run -
  sheetlink run request.json --response response.json --quiet
  HUBSPOT_API_KEY=... sheetlink run request.json")]
    Run {
        /// Request file (use '-' to read from stdin)
        request: PathBuf,

        /// Response template file (defaults to the request's declared outputs)
        #[arg(long)]
        response: Option<PathBuf>,

        /// HubSpot API key
        #[arg(long, env = "HUBSPOT_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// API base URL override
        #[arg(long)]
        api_base: Option<String>,

        /// HTTP timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Suppress progress output on stderr
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Store the HubSpot API key in the saved config file
    Login {
        /// API key (falls back to HUBSPOT_API_KEY, then an interactive prompt)
        #[arg(long, env = "HUBSPOT_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// API base URL to store alongside the key
        #[arg(long, default_value = DEFAULT_API_BASE)]
        api_base: String,
    },

    /// List the registered hook names
    Hooks,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            request,
            response,
            api_key,
            api_base,
            timeout,
            quiet,
        } => cmd_run(request, response, api_key, api_base, timeout, quiet),
        Commands::Login { api_key, api_base } => cmd_login(api_key, api_base),
        Commands::Hooks => cmd_hooks(),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn io(msg: impl Into<String>) -> Self {
        Self { code: EXIT_IO, message: msg.into(), hint: None }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self { code: EXIT_PARSE, message: msg.into(), hint: None }
    }
}

// ── run ─────────────────────────────────────────────────────────────

/// Request fixture: the calculation request plus the output slots the
/// workbook declares. The declared outputs become the response template
/// the hooks annotate.
#[derive(Deserialize)]
struct RequestFixture {
    #[serde(flatten)]
    request: CalculationRequest,
    #[serde(default)]
    outputs: Vec<OutputField>,
}

fn cmd_run(
    request_path: PathBuf,
    response_path: Option<PathBuf>,
    api_key: Option<String>,
    api_base: Option<String>,
    timeout: Option<u64>,
    quiet: bool,
) -> Result<u8, CliError> {
    if timeout == Some(0) {
        return Err(CliError {
            code: EXIT_USAGE,
            message: "--timeout must be greater than zero".into(),
            hint: None,
        });
    }

    // 1. Load the request fixture
    let raw = read_input(&request_path)?;
    let fixture: RequestFixture = serde_json::from_str(&raw)
        .map_err(|e| CliError::parse(format!("invalid request JSON: {}", e)))?;

    // 2. Build the response the hooks will annotate
    let mut response = match response_path {
        Some(path) => {
            let raw = std::fs::read_to_string(&path).map_err(|e| {
                CliError::io(format!("cannot read {}: {}", path.display(), e))
            })?;
            serde_json::from_str(&raw)
                .map_err(|e| CliError::parse(format!("invalid response JSON: {}", e)))?
        }
        None => CalculationResponse { outputs: fixture.outputs },
    };

    // 3. Resolve config (flag > env > saved file)
    let mut config = HubSpotConfig::resolve(api_key).map_err(|e| CliError {
        code: EXIT_NOT_AUTH,
        message: e.to_string(),
        hint: Some("pass --api-key or export HUBSPOT_API_KEY".into()),
    })?;
    if let Some(base) = api_base {
        config.api_base = base;
    }
    if let Some(secs) = timeout {
        config.timeout_secs = secs;
    }

    // 4. Register hooks and dispatch
    let mut registry = HookRegistry::new();
    registry.register(Box::new(ContactSyncHook::new(HubSpotClient::new(&config))));

    let show_progress = !quiet && atty::is(atty::Stream::Stderr);
    if show_progress {
        eprintln!("Running {} hook(s)...", registry.names().len());
    }

    let outcome = registry.run_after_calculation(&fixture.request, &mut response);

    if show_progress {
        if outcome.success {
            eprintln!("Done");
        } else {
            for msg in &outcome.response_messages {
                eprintln!("hook failure: {}", msg.message);
            }
        }
    }

    // 5. Print the annotated response and the outcome envelope
    let doc = serde_json::json!({
        "response": response,
        "result": &outcome,
    });
    let json = serde_json::to_string_pretty(&doc).map_err(|e| CliError {
        code: EXIT_ERROR,
        message: format!("cannot serialize run output: {}", e),
        hint: None,
    })?;
    println!("{}", json);

    Ok(if outcome.success { EXIT_SUCCESS } else { EXIT_HOOK_FAILED })
}

fn read_input(path: &Path) -> Result<String, CliError> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| CliError::io(format!("cannot read stdin: {}", e)))?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| CliError::io(format!("cannot read {}: {}", path.display(), e)))
    }
}

// ── login ───────────────────────────────────────────────────────────

fn cmd_login(api_key: Option<String>, api_base: String) -> Result<u8, CliError> {
    // Resolve key: --api-key flag > HUBSPOT_API_KEY env > interactive prompt
    let key = if let Some(k) = api_key {
        k.trim().to_string()
    } else if atty::is(atty::Stream::Stdin) {
        eprint!("HubSpot API key: ");
        io::stderr().flush().ok();
        let mut buf = String::new();
        io::stdin().read_line(&mut buf).map_err(|e| CliError {
            code: EXIT_ERROR,
            message: e.to_string(),
            hint: None,
        })?;
        buf.trim().to_string()
    } else {
        return Err(CliError {
            code: EXIT_USAGE,
            message: "No API key provided and stdin is not a TTY".into(),
            hint: Some("pass --api-key or set HUBSPOT_API_KEY".into()),
        });
    };

    if key.is_empty() {
        return Err(CliError {
            code: EXIT_USAGE,
            message: "No API key provided".into(),
            hint: Some("pass --api-key or set HUBSPOT_API_KEY".into()),
        });
    }

    let mut config = HubSpotConfig::new(key);
    config.api_base = api_base;
    save_config(&config).map_err(|e| CliError {
        code: EXIT_IO,
        message: e,
        hint: None,
    })?;

    if let Some(path) = config_file_path() {
        eprintln!("API key saved to {}", path.display());
    }
    Ok(EXIT_SUCCESS)
}

// ── hooks ───────────────────────────────────────────────────────────

fn cmd_hooks() -> Result<u8, CliError> {
    // The registered set is fixed at build time; listing must not require
    // a configured API key.
    println!("{}", ContactSyncHook::NAME);
    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_fixture_parses_inputs_and_outputs() {
        let json = r#"{
            "inputs": [
                { "ref": "iName", "value": [["Jane"]] },
                { "ref": "iEmail", "value": [["jane@example.com"]] }
            ],
            "outputs": [
                { "ref": "Response", "value": [[null]] }
            ]
        }"#;

        let fixture: RequestFixture = serde_json::from_str(json).unwrap();
        assert_eq!(fixture.request.inputs.len(), 2);
        assert_eq!(fixture.outputs.len(), 1);
        assert_eq!(fixture.outputs[0].name, "Response");
    }

    #[test]
    fn test_request_fixture_outputs_are_optional() {
        let json = r#"{ "inputs": [] }"#;
        let fixture: RequestFixture = serde_json::from_str(json).unwrap();
        assert!(fixture.outputs.is_empty());
    }
}
