use argbind::SwitchParser;
use std::collections::HashSet;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut includes: Vec<PathBuf> = Vec::default();
    let mut tags: HashSet<String> = HashSet::default();
    let mut output: String = "a.out".to_string();

    let mut parser = SwitchParser::from_env()
        .add_multi_switch('I', "include", &mut includes)
        .add_multi_switch('t', "tag", &mut tags)
        .add_switch('o', "output", &mut output);

    match parser.parse() {
        Ok(true) => {}
        Ok(false) => {
            eprintln!("usage: collector [-I PATH]... [-t TAG]... [-o FILE]");
            return ExitCode::FAILURE;
        }
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::FAILURE;
        }
    };
    drop(parser);

    println!("Includes: {includes:?}");
    println!("Tags: {tags:?}");
    println!("Output: {output}");
    ExitCode::SUCCESS
}
