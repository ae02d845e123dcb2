use argbind::{Parameter, ParseError, Scalar, Switch, SwitchParser};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Quiet,
    Normal,
}

fn main() -> Result<(), ParseError> {
    let mut level = Level::Normal;
    let mut confirm: bool = false;

    let mut parser = SwitchParser::from_env()
        // A flag switch for a non-bool variable.
        .add(Parameter::new(Switch::new(&mut level, Level::Quiet), 'q', "quiet"))
        // A bool switch that still consumes a value: `--confirm true`.
        .add(Parameter::new(Scalar::new(&mut confirm), 'c', "confirm"));
    parser.try_parse()?;
    drop(parser);

    println!("Level: {level:?}, confirm: {confirm}");
    Ok(())
}
