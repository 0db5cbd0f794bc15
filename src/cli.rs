use clap::Parser;
use std::fmt;

#[derive(Parser, Debug)]
#[command(name = "create-release")]
#[command(version, about = "Publish the release described in RELEASE_BODY.md to GitHub", long_about = None)]
pub struct Args {
    /// GitHub token; falls back to the GITHUB_TOKEN environment variable
    pub token: Option<String>,
}

pub const USAGE: &str = "\
Options:
1. Pass it as an argument: create-release YOUR_TOKEN
2. Set the environment variable: export GITHUB_TOKEN=your_token

To get a token:
1. Go to: https://github.com/settings/tokens
2. Generate a new token (classic) with the 'repo' scope";

#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    /// The argument wins over the environment; blank values count as missing.
    pub fn resolve(arg: Option<String>, env: Option<String>) -> Option<Token> {
        arg.into_iter()
            .chain(env)
            .find(|value| !value.trim().is_empty())
            .map(Token)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}
