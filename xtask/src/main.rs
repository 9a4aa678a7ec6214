use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::*;
use std::process::{Command, Stdio};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "x")]
#[command(about = "Development automation for saturn-post")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all CI checks (fmt, clippy, build, test)
    Ci {
        #[arg(long)]
        verbose: bool,
    },
    /// Quick checks before commit (fmt, clippy)
    Check {
        #[arg(long)]
        verbose: bool,
    },
    /// Format code
    Fmt {
        #[arg(long)]
        check: bool,
    },
    /// Run clippy
    Clippy {
        #[arg(long)]
        fix: bool,
    },
    /// Build the project
    Build {
        #[arg(long)]
        release: bool,
        /// Build without the cpal audio backend
        #[arg(long)]
        no_audio: bool,
    },
    /// Run tests
    Test {
        #[arg(long)]
        doc: bool,
        #[arg(long)]
        ignored: bool,
        #[command(flatten)]
        modules: ModuleFilter,
    },
    /// Run benchmarks
    Bench,
    /// Run the POST menu on the simulated machine
    Simulate {
        /// Comma-separated button taps (e.g. "down, down, a")
        #[arg(short = 't', long, default_value = "a")]
        taps: String,
        /// Number of frames to run
        #[arg(short = 'n', long, default_value = "600")]
        frames: u64,
        /// Work RAM longword index to hold at zero
        #[arg(long)]
        ram_fault: Option<String>,
        /// VDP1 VRAM longword index to hold at zero
        #[arg(long)]
        vram_fault: Option<String>,
        /// Print every screen
        #[arg(long)]
        show_console: bool,
        /// Build in release mode
        #[arg(long)]
        release: bool,
    },
    /// Pre-commit hook (fmt, clippy, test)
    PreCommit,
    /// Install git hooks
    InstallHooks,
}

/// Restrict `cargo x test` to library modules
#[derive(Args, Default, Clone, Copy)]
struct ModuleFilter {
    /// Run only pattern verifier tests
    #[arg(long)]
    pattern: bool,
    /// Run only controller tests
    #[arg(long)]
    controller: bool,
    /// Run only diagnostic tests
    #[arg(long)]
    diag: bool,
    /// Run only menu tests
    #[arg(long)]
    menu: bool,
    /// Run only simulator tests
    #[arg(long)]
    sim: bool,
}

impl ModuleFilter {
    fn selected(&self) -> Vec<(&'static str, &'static str)> {
        [
            (self.pattern, "core::pattern", "Pattern"),
            (self.controller, "core::controller", "Controller"),
            (self.diag, "core::diag", "Diagnostics"),
            (self.menu, "core::menu", "Menu"),
            (self.sim, "core::sim", "Simulator"),
        ]
        .into_iter()
        .filter(|(enabled, _, _)| *enabled)
        .map(|(_, path, name)| (path, name))
        .collect()
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ci { verbose } => run_ci(verbose),
        Commands::Check { verbose } => run_check(verbose),
        Commands::Fmt { check } => run_fmt(check),
        Commands::Clippy { fix } => run_clippy(fix),
        Commands::Build { release, no_audio } => run_build(release, no_audio),
        Commands::Test {
            doc,
            ignored,
            modules,
        } => run_test(doc, ignored, modules),
        Commands::Bench => run_bench(),
        Commands::Simulate {
            taps,
            frames,
            ram_fault,
            vram_fault,
            show_console,
            release,
        } => run_simulate(SimulateOptions {
            taps,
            frames,
            ram_fault,
            vram_fault,
            show_console,
            release,
        }),
        Commands::PreCommit => run_pre_commit(),
        Commands::InstallHooks => install_hooks(),
    }
}

fn run_ci(verbose: bool) -> Result<()> {
    println!("{}", "=== Running CI Pipeline ===".bold().blue());

    let start = Instant::now();

    run_task("Format Check", || run_fmt(true), verbose)?;
    run_task("Clippy", || run_clippy(false), verbose)?;
    run_task("Build", || run_build(false, false), verbose)?;
    run_task("Build (no audio)", || run_build(false, true), verbose)?;
    run_task(
        "Test",
        || run_test(false, false, ModuleFilter::default()),
        verbose,
    )?;

    let elapsed = start.elapsed();
    println!(
        "\n{} {}",
        "✓ CI passed in".green().bold(),
        format!("{:.2}s", elapsed.as_secs_f64()).bold()
    );

    Ok(())
}

fn run_check(verbose: bool) -> Result<()> {
    println!("{}", "=== Running Quick Checks ===".bold().blue());

    let start = Instant::now();

    run_task("Format Check", || run_fmt(true), verbose)?;
    run_task("Clippy", || run_clippy(false), verbose)?;

    let elapsed = start.elapsed();
    println!(
        "\n{} {}",
        "✓ Checks passed in".green().bold(),
        format!("{:.2}s", elapsed.as_secs_f64()).bold()
    );

    Ok(())
}

fn run_fmt(check: bool) -> Result<()> {
    let mut cmd = Command::new("cargo");
    cmd.arg("fmt").arg("--all");

    if check {
        cmd.arg("--").arg("--check");
    }

    execute_command(&mut cmd)
}

fn run_clippy(fix: bool) -> Result<()> {
    let mut cmd = Command::new("cargo");
    cmd.arg("clippy").arg("--all-targets").arg("--all-features");

    if fix {
        cmd.arg("--fix");
    } else {
        cmd.arg("--").arg("-D").arg("warnings");
    }

    execute_command(&mut cmd)
}

fn run_build(release: bool, no_audio: bool) -> Result<()> {
    let mut cmd = Command::new("cargo");
    cmd.arg("build");

    if release {
        cmd.arg("--release");
    }
    if no_audio {
        cmd.arg("--no-default-features");
    }

    execute_command(&mut cmd)
}

fn run_test(doc: bool, ignored: bool, modules: ModuleFilter) -> Result<()> {
    if doc {
        let mut cmd = Command::new("cargo");
        cmd.arg("test").arg("--all-features").arg("--doc");

        if ignored {
            cmd.arg("--").arg("--ignored");
        }

        return execute_command(&mut cmd);
    }

    let selected = modules.selected();

    if selected.is_empty() {
        let mut cmd = Command::new("cargo");
        cmd.arg("test").arg("--all-features");

        if ignored {
            cmd.arg("--").arg("--ignored");
        }

        return execute_command(&mut cmd);
    }

    let mut failed = Vec::new();

    for &(module_path, module_name) in &selected {
        println!("{} Running {} tests...", "→".blue(), module_name.bold());

        let mut cmd = Command::new("cargo");
        cmd.arg("test")
            .arg("--all-features")
            .arg("--lib")
            .arg(module_path);

        if ignored {
            cmd.arg("--").arg("--ignored");
        }

        match execute_command(&mut cmd) {
            Ok(_) => println!("{} {} tests passed\n", "✓".green(), module_name),
            Err(e) => {
                println!("{} {} tests failed\n", "✗".red(), module_name);
                if selected.len() == 1 {
                    return Err(e);
                }
                failed.push(module_name);
            }
        }
    }

    if failed.is_empty() {
        Ok(())
    } else {
        anyhow::bail!("Module tests failed: {}", failed.join(", "))
    }
}

fn run_bench() -> Result<()> {
    let mut cmd = Command::new("cargo");
    cmd.arg("bench");

    execute_command(&mut cmd)
}

struct SimulateOptions {
    taps: String,
    frames: u64,
    ram_fault: Option<String>,
    vram_fault: Option<String>,
    show_console: bool,
    release: bool,
}

fn run_simulate(options: SimulateOptions) -> Result<()> {
    println!("{}", "=== Simulated POST ===".bold().blue());
    println!("{} Taps: {}", "→".blue(), options.taps.cyan());
    println!(
        "{} Frames: {}",
        "→".blue(),
        options.frames.to_string().bold()
    );
    if let Some(index) = &options.ram_fault {
        println!("{} Work RAM fault at index {}", "→".blue(), index.yellow());
    }
    if let Some(index) = &options.vram_fault {
        println!("{} VRAM fault at index {}", "→".blue(), index.yellow());
    }
    println!(
        "{} Build mode: {}",
        "→".blue(),
        if options.release {
            "release".green().bold()
        } else {
            "debug".yellow().bold()
        }
    );
    println!();

    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.arg("run").arg("--bin").arg("saturn-post");

    if options.release {
        cmd.arg("--release");
    }

    cmd.arg("--")
        .arg("--taps")
        .arg(&options.taps)
        .arg("-n")
        .arg(options.frames.to_string());

    if let Some(index) = &options.ram_fault {
        cmd.arg("--ram-fault").arg(index);
    }
    if let Some(index) = &options.vram_fault {
        cmd.arg("--vram-fault").arg(index);
    }
    if options.show_console {
        cmd.arg("--show-console");
    }

    let status = cmd
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    if !status.success() {
        println!("\n{} Simulated POST failed", "✗".red().bold());
        anyhow::bail!("Simulated POST failed with exit code: {}", status);
    }

    let elapsed = start.elapsed();
    println!(
        "\n{} Simulated POST finished in {}",
        "✓".green().bold(),
        format!("{:.2}s", elapsed.as_secs_f64()).bold()
    );

    Ok(())
}

fn run_pre_commit() -> Result<()> {
    println!("{}", "=== Pre-commit Checks ===".bold().blue());

    let start = Instant::now();

    run_task("Format Check", || run_fmt(true), false)?;
    run_task("Clippy", || run_clippy(false), false)?;
    run_task(
        "Test",
        || run_test(false, false, ModuleFilter::default()),
        false,
    )?;

    let elapsed = start.elapsed();
    println!(
        "\n{} {}",
        "✓ Pre-commit checks passed in".green().bold(),
        format!("{:.2}s", elapsed.as_secs_f64()).bold()
    );

    Ok(())
}

fn install_hooks() -> Result<()> {
    use std::fs;

    println!("{}", "Installing git hooks...".bold());

    let hook_content = r#"#!/bin/sh
# Auto-generated by cargo x install-hooks
set -e

echo "Running pre-commit checks..."
cargo x pre-commit
"#;

    let hook_path = ".git/hooks/pre-commit";
    fs::write(hook_path, hook_content)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mut perms = fs::metadata(hook_path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(hook_path, perms)?;
    }

    println!("{}", "✓ Git hooks installed".green());
    println!("  Pre-commit hook will run: fmt, clippy, test");

    Ok(())
}

fn run_task<F>(name: &str, task: F, verbose: bool) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    print!("{} {} ... ", "→".blue(), name);

    let start = Instant::now();

    match task() {
        Ok(_) => {
            let elapsed = start.elapsed();
            println!(
                "{} {}",
                "✓".green().bold(),
                if verbose {
                    format!("({:.2}s)", elapsed.as_secs_f64())
                } else {
                    String::new()
                }
            );
            Ok(())
        }
        Err(e) => {
            println!("{}", "✗".red().bold());
            Err(e)
        }
    }
}

fn execute_command(cmd: &mut Command) -> Result<()> {
    let status = cmd
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    if !status.success() {
        anyhow::bail!("Command failed with exit code: {}", status);
    }

    Ok(())
}
