use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("could not read `{path}`")]
    #[diagnostic(code(cmdgraft::io))]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid command description")]
    #[diagnostic(
        code(cmdgraft::description),
        help("nodes need a `kind` (literal, argument, other) and a `name`")
    )]
    Parse(#[from] serde_json::Error),

    #[error("argument `{name}` has no `type`")]
    #[diagnostic(code(cmdgraft::description))]
    MissingArgumentType { name: String },

    #[error("argument `{name}` has unknown type `{ty}`")]
    #[diagnostic(
        code(cmdgraft::description),
        help("known types: bool, integer, float, word, string, greedy, entity, position")
    )]
    UnknownArgumentType { name: String, ty: String },

    #[error("`{from}` redirects to `{to}`, which does not exist")]
    #[diagnostic(code(cmdgraft::description))]
    UnknownRedirect { from: String, to: String },

    #[error("no command at `{path}`")]
    #[diagnostic(code(cmdgraft::edit))]
    UnknownPath { path: String },

    #[error("expected PATH=NAME, got `{0}`")]
    #[diagnostic(code(cmdgraft::edit), help("for example --alias \"teleport=tp\""))]
    MalformedAlias(String),

    #[error(transparent)]
    #[diagnostic(code(cmdgraft::tree))]
    Tree(#[from] cmdgraft::Error),
}
