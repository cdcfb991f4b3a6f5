//! Command dispatch.
//!
//! A [`CommandRouter`] maps a command name to a [`QueryKind`], then runs
//! normalize, fetch and render for it. [`CommandRouter::handle`] always
//! produces a document: routing errors and panics inside the pipeline are
//! turned into an error reply instead of reaching the caller.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use breachbot::{CommandRouter, Config, Invocation, LookupClient, ResultRenderer};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::new("https://leaks.example.com/api")?;
//! let router = CommandRouter::new(
//!     Arc::new(LookupClient::new(&config)?),
//!     ResultRenderer::new(config.title()),
//! );
//!
//! let doc = router.handle(&Invocation::parse_line("mail someone@example.com")?).await;
//! println!("{} fields", doc.fields.len());
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::client::LeakLookup;
use crate::model::{DisplayDocument, LeakQuery, QueryKind};
use crate::render::ResultRenderer;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing required option '{option}'")]
    MissingOption { command: String, option: String },

    #[error("Empty command line")]
    EmptyLine,
}

/// Registration metadata for one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub option: &'static str,
    pub option_description: &'static str,
    pub kind: QueryKind,
    pub aliases: &'static [&'static str],
}

static COMMANDS: [CommandSpec; 3] = [
    CommandSpec {
        name: "mail",
        description: "Search for leaks by email address",
        option: "email",
        option_description: "Email",
        kind: QueryKind::Email,
        aliases: &[],
    },
    CommandSpec {
        name: "hashmail",
        description: "Search for leaks by hashed email (SHA256)",
        option: "email",
        option_description: "Email",
        kind: QueryKind::HashedEmail,
        aliases: &[],
    },
    CommandSpec {
        name: "usernamev2",
        description: "Search for leaks by username",
        option: "username",
        option_description: "Username",
        kind: QueryKind::Username,
        aliases: &["username"],
    },
];

/// All commands the router understands, in registration order.
pub fn commands() -> &'static [CommandSpec] {
    &COMMANDS
}

pub fn find_command(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS
        .iter()
        .find(|c| c.name == name || c.aliases.contains(&name))
}

/// One incoming command, independent of the chat platform it came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Invocation {
    pub command: String,
    pub options: HashMap<String, String>,
}

impl Invocation {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            options: HashMap::new(),
        }
    }

    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }

    /// Parses a text line such as `hashmail someone@example.com`.
    ///
    /// The first word names the command; the rest of the line, trimmed, becomes
    /// the value of that command's option. Unknown commands are kept as-is so
    /// the router can reject them.
    pub fn parse_line(line: &str) -> Result<Self, RouterError> {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        if command.is_empty() {
            return Err(RouterError::EmptyLine);
        }

        let mut invocation = Invocation::new(command);
        if let Some(spec) = find_command(command) {
            if !rest.is_empty() {
                invocation = invocation.with_option(spec.option, rest);
            }
        }
        Ok(invocation)
    }

    pub fn option(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }
}

pub struct CommandRouter {
    lookup: Arc<dyn LeakLookup>,
    renderer: ResultRenderer,
}

impl CommandRouter {
    pub fn new(lookup: Arc<dyn LeakLookup>, renderer: ResultRenderer) -> Self {
        Self { lookup, renderer }
    }

    pub fn renderer(&self) -> &ResultRenderer {
        &self.renderer
    }

    /// Runs the full pipeline for `invocation`, surfacing routing errors.
    pub async fn dispatch(&self, invocation: &Invocation) -> Result<DisplayDocument, RouterError> {
        let spec = find_command(&invocation.command)
            .ok_or_else(|| RouterError::UnknownCommand(invocation.command.clone()))?;

        let raw = invocation
            .option(spec.option)
            .ok_or_else(|| RouterError::MissingOption {
                command: spec.name.to_string(),
                option: spec.option.to_string(),
            })?;

        let query = LeakQuery::new(spec.kind, raw);
        debug!(
            command = spec.name,
            kind = query.kind().as_str(),
            backend = self.lookup.name(),
            "dispatching lookup"
        );

        let result = self.lookup.fetch(query.normalized()).await;
        Ok(self
            .renderer
            .render(&result, query.normalized(), query.kind().label()))
    }

    /// Like [`dispatch`](Self::dispatch), but every failure becomes an error
    /// document. Never panics.
    pub async fn handle(&self, invocation: &Invocation) -> DisplayDocument {
        match AssertUnwindSafe(self.dispatch(invocation))
            .catch_unwind()
            .await
        {
            Ok(Ok(doc)) => doc,
            Ok(Err(e)) => {
                match &e {
                    RouterError::UnknownCommand(name) => warn!(command = %name, "unknown command"),
                    other => debug!(error = %other, "rejected invocation"),
                }
                self.renderer.render_error(&e.to_string())
            }
            Err(_) => {
                error!(command = %invocation.command, "command pipeline panicked");
                self.renderer
                    .render_error("Internal error while processing the command")
            }
        }
    }
}
