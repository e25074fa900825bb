use std::io;
use std::num::ParseIntError;

quick_error! {
    #[derive(Debug)]
    pub enum Error {
        Io(err: io::Error) {
            from()
            display("I/O error: {}", err)
            cause(err)
        }
        Toml(err: toml::de::Error) {
            from()
            display("invalid adapter config: {}", err)
            cause(err)
        }
        InvalidNumber(input: String, err: ParseIntError) {
            display("invalid number '{}': {}", input, err)
            cause(err)
        }
        OutOfRange(input: String) {
            display("value '{}' does not fit in a byte", input)
        }
        UnknownSetting(key: String) {
            display("unknown adapter setting '{}'", key)
        }
        NotDetected {
            display("no Cirrus Logic adapter detected")
        }
    }
}
