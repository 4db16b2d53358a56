use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "wstatus",
    version,
    about = "Decode process wait status values into human-readable descriptions",
    long_about = "wstatus turns the raw status word written by wait()/waitpid() into prose \
                  such as \"exited with code 2\" or \"terminated by signal 11 (Core Dumped)\".\n\n\
                  Use `wstatus decode` for status values you already have, or \
                  `wstatus run` to run a command and report how it ended."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode one or more raw wait status values
    Decode {
        /// Output format: text or yaml (default: $WSTATUS_FORMAT, then text)
        #[arg(long, value_name = "FORMAT")]
        format: Option<String>,

        /// Prefix each text line with the raw status value
        #[arg(long)]
        show_raw: bool,

        /// Status values: decimal, 0x hexadecimal or 0o octal
        #[arg(
            required = true,
            allow_negative_numbers = true,
            value_name = "STATUS"
        )]
        statuses: Vec<String>,
    },

    /// Run a command, wait for it, and report how it ended
    Run {
        /// Do not print the status report to stderr
        #[arg(long, short)]
        quiet: bool,

        /// Command and arguments to run
        #[arg(
            required = true,
            trailing_var_arg = true,
            allow_hyphen_values = true,
            value_name = "CMD"
        )]
        command: Vec<String>,
    },

    #[command(
        about = "Generate shell completion script (bash, zsh, fish, powershell, elvish)",
        long_about = "Generates a completion script for your shell to enable tab-completion of wstatus commands.\n\n\
                      EXAMPLES:\n\
                      \n\
                      # Generate bash completions and install system-wide\n\
                      wstatus completions bash | sudo tee /etc/bash_completion.d/wstatus\n\
                      \n\
                      # Generate fish completions and install in user directory\n\
                      wstatus completions fish | tee ~/.config/fish/completions/wstatus.fish"
    )]
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
