use colored::*;

pub fn show() {
    let banner = r#"
    ██████╗ ██████╗ ██████╗ ██████╗  ██████╗ ██████╗ ███████╗
    ██╔══██╗██╔══██╗██╔══██╗██╔══██╗██╔═══██╗██╔══██╗██╔════╝
    ██║  ██║██████╔╝██████╔╝██████╔╝██║   ██║██████╔╝█████╗
    ██║  ██║██╔══██╗██╔═══╝ ██╔══██╗██║   ██║██╔══██╗██╔══╝
    ██████╔╝██████╔╝██║     ██║  ██║╚██████╔╝██████╔╝███████╗
    ╚═════╝ ╚═════╝ ╚═╝     ╚═╝  ╚═╝ ╚═════╝ ╚═════╝ ╚══════╝
    "#;

    println!("{}", banner.bright_blue());
    println!(
        "    {}",
        "A connection prober for MySQL-protocol database servers".bright_yellow()
    );
    println!("    {}", "Version: 0.1.0".bright_yellow());
    println!();
}
