use anyhow::{Context, anyhow};
use lexical_analysis::{LANGUAGES, analyze_tag};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "languages" => {
            for language in LANGUAGES {
                println!(
                    "{} ({}, {} script)",
                    language,
                    language.iso_639_1(),
                    language.writing_system()
                );
            }
            Ok(())
        }
        tag => {
            if args.len() < 3 {
                eprintln!("Error: analysis requires a language tag and a file path");
                print_usage();
                return Err(anyhow!("missing file path"));
            }
            analyze_file(tag, &args[2])
        }
    }
}

fn analyze_file(tag: &str, path: &str) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {path}"))?;

    let result = analyze_tag(&text, tag);
    println!("{}", serde_json::to_string_pretty(&result)?);

    if let Some(error) = &result.error {
        return Err(anyhow!("analysis failed: {error}"));
    }
    Ok(())
}

fn print_usage() {
    println!("Usage: analyze-text <command>");
    println!();
    println!("Commands:");
    println!("  <language> <file.txt>   Analyze a UTF-8 text file and print the result as JSON");
    println!("                          (language: es/español/spanish, en/inglés/english, ru/ruso/russian)");
    println!("  languages               List the supported languages");
    println!();
    println!("Example: analyze-text es documento.txt");
}
