use std::path::PathBuf;

use clap::{Args, Subcommand};
use plantilla_core::{NumericField, TextField};

/// Top-level command tree. Each command is one view entry point.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Show the microservice home message.
    Home,
    /// Show the author / e-mail / date block.
    About,
    /// Table of every player.
    List,
    /// Name-only table of every player.
    Names,
    /// Name-only table sorted alphabetically.
    Alphabetical,
    /// Table sorted by a text field (nombre, lateralidad).
    SortBy(SortByArgs),
    /// Table sorted by a nested field (fecha.dia|mes|anio, direccion.calle|localidad|provincia|pais).
    SortByComposite(SortByCompositeArgs),
    /// Table sorted by a numeric field (numero_participaciones_jo).
    SortByNumeric(SortByNumericArgs),
    /// Single player by reference id.
    Show(ShowArgs),
    /// Players whose name matches exactly.
    ByName(ByNameArgs),
    /// Players matching several fields (AND, or OR with --any).
    ByMultiple(ByMultipleArgs),
    /// Render every player through a `### TAG ###` template file.
    Template(TemplateArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SortByArgs {
    pub field: TextField,
}

#[derive(Clone, Debug, Args)]
pub struct SortByCompositeArgs {
    pub field: String,
    pub subfield: String,
}

#[derive(Clone, Debug, Args)]
pub struct SortByNumericArgs {
    pub field: NumericField,
}

#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct ByNameArgs {
    pub name: String,
}

#[derive(Clone, Debug, Args)]
pub struct ByMultipleArgs {
    #[arg(long)]
    pub nombre: String,
    #[arg(long)]
    pub localidad: String,
    #[arg(long)]
    pub participaciones: String,
    #[arg(long)]
    pub lateralidad: String,
    /// Match any field instead of all of them.
    #[arg(long)]
    pub any: bool,
}

#[derive(Clone, Debug, Args)]
pub struct TemplateArgs {
    /// Path to the template file.
    pub path: PathBuf,
}
