use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "webrelay-setup",
    about = "Provision this host to run the WebRelay proxy agent",
    long_about = "One-shot installer: prepares a Linux host for the WebRelay proxy agent \
                  and registers it with the control plane. Safe to re-run; every step is \
                  idempotent.",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    /// API key identifying the WebRelay account (required)
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// URL the control plane calls back on (required)
    #[arg(long, value_name = "URL")]
    pub callback_url: Option<String>,

    /// Explicit control-plane URL (defaults to the public endpoint)
    #[arg(long, value_name = "URL")]
    pub server_url: Option<String>,

    /// Port the agent should listen on
    #[arg(long, value_name = "PORT")]
    pub port: Option<u16>,
}

#[derive(Parser, Debug)]
pub struct GlobalFlags {
    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Quiet mode
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Skip the interactive configuration phase (CI/CD)
    #[arg(long, global = true)]
    pub noconfirm: bool,
}

/// Flags this release understands. Anything else on argv is dropped before
/// clap parsing, so installers driven by newer panels can pass extra
/// `--key=value` tokens without breaking older binaries.
const KNOWN_FLAGS: &[(&str, bool)] = &[
    // (flag, takes a separate value token)
    ("--api-key", true),
    ("--callback-url", true),
    ("--server-url", true),
    ("--port", true),
    ("--quiet", false),
    ("-q", false),
    ("--verbose", false),
    ("-v", false),
    ("--noconfirm", false),
    ("--help", false),
    ("-h", false),
    ("--version", false),
    ("-V", false),
];

/// Filter argv down to the tokens this binary understands.
///
/// Keeps argv[0], known flags in both `--key=value` and `--key value` form,
/// and silently drops everything else.
pub fn filter_known_args(args: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut out = Vec::new();
    let mut iter = args.into_iter();

    // argv[0] is the binary name, always kept
    if let Some(bin) = iter.next() {
        out.push(bin);
    }

    let mut expect_value = false;
    for token in iter {
        if expect_value {
            out.push(token);
            expect_value = false;
            continue;
        }

        let name = token.split_once('=').map_or(token.as_str(), |(n, _)| n);
        if let Some((_, takes_value)) = KNOWN_FLAGS.iter().find(|(f, _)| *f == name) {
            expect_value = *takes_value && !token.contains('=');
            out.push(token);
        }
        // Unknown token: ignored for forward compatibility.
    }

    out
}
