//! Command-line interface for generating layouts from JSON files

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::algorithm::executor::generate_layout;
use crate::catalog::seed::builtin_catalog;
use crate::catalog::{CatalogDocument, CatalogSnapshot};
use crate::io::contract::{LayoutRequest, LayoutResponse};
use crate::io::error::{LayoutError, Result};

#[derive(Parser)]
#[command(name = "bedplan")]
#[command(
    author,
    version,
    about = "Generate a companion-planting layout for a rectangular garden plot"
)]
/// Command-line arguments for the layout tool
pub struct Cli {
    /// Request JSON file (plot size in cm plus vegetable quantities)
    #[arg(value_name = "REQUEST")]
    pub request: PathBuf,

    /// Catalog JSON file; the built-in catalog is used when omitted
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Write the response to this file instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the response JSON
    #[arg(short, long)]
    pub pretty: bool,
}

/// Runs one request file through the engine and emits the response
pub struct RequestProcessor {
    cli: Cli,
}

impl RequestProcessor {
    /// Create a processor from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the catalog and request, generate the layout, emit the response
    ///
    /// # Errors
    ///
    /// Returns an error when an input file cannot be read or parsed, when
    /// validation fails, or when the response cannot be written.
    pub fn process(&self) -> Result<()> {
        let snapshot = self.load_catalog()?;
        let request = load_request(&self.cli.request)?;
        let response = generate_layout(&request, &snapshot)?;
        self.emit(&response)
    }

    fn load_catalog(&self) -> Result<CatalogSnapshot> {
        self.cli.catalog.as_ref().map_or_else(builtin_catalog, |path| {
            let text = read_file(path, "read catalog")?;
            let document: CatalogDocument =
                serde_json::from_str(&text).map_err(|source| LayoutError::Parse {
                    path: path.clone(),
                    expected: "catalog document",
                    source,
                })?;
            document.into_snapshot()
        })
    }

    fn emit(&self, response: &LayoutResponse) -> Result<()> {
        let rendered = render(response, self.cli.pretty)?;
        self.cli.output.as_ref().map_or_else(
            || {
                // Allow print for emitting the result to the caller
                #[allow(clippy::print_stdout)]
                {
                    println!("{rendered}");
                }
                Ok(())
            },
            |path| {
                fs::write(path, &rendered).map_err(|source| LayoutError::FileSystem {
                    path: path.clone(),
                    operation: "write response",
                    source,
                })
            },
        )
    }
}

fn load_request(path: &Path) -> Result<LayoutRequest> {
    let text = read_file(path, "read request")?;
    serde_json::from_str(&text).map_err(|source| LayoutError::Parse {
        path: path.to_path_buf(),
        expected: "layout request",
        source,
    })
}

fn read_file(path: &Path, operation: &'static str) -> Result<String> {
    fs::read_to_string(path).map_err(|source| LayoutError::FileSystem {
        path: path.to_path_buf(),
        operation,
        source,
    })
}

fn render(response: &LayoutResponse, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(response)
    } else {
        serde_json::to_string(response)
    };
    rendered.map_err(|source| LayoutError::Serialize {
        subject: "layout response",
        source,
    })
}
