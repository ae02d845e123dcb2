use argbind::SwitchParser;

fn main() {
    let mut verbose: bool = false;
    let mut count: i32 = 0;

    let parser = SwitchParser::from_env()
        .add_switch('v', "verbose", &mut verbose)
        .add_switch('n', "count", &mut count);
    parser.parse_or_exit();

    println!("verbose: {verbose}, count: {count}");
}
