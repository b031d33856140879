use simplearg::{Arguments, CursorState, Help, Parameter, split_into_tokens};

#[derive(Debug, Default)]
struct Server {
    port: u16,
    host: String,
    ratio: f64,
    workers: Option<u8>,
    verbose: bool,
}

impl Server {
    const PARAMS: [Parameter<Server>; 6] = [
        Parameter::unbound("Network:", "", ""),
        Parameter::new(Server::listen, "listen", "host and port to bind", "-l bind"),
        Parameter::new(Server::port, "--port=", "port only", "-p"),
        Parameter::new(Server::ratio, "--ratio=", "load ratio", ""),
        Parameter::new(Server::workers, "workers", "worker count", "-w"),
        Parameter::new(Server::verbose, "--verbose", "chatty logs", "-v"),
    ];

    fn listen(&mut self, name: &str, args: &mut Arguments<'_>) -> bool {
        args.replace_errors(format!("{name}: "));
        args.getall((&mut self.host, &mut self.port))
    }

    fn port(&mut self, name: &str, args: &mut Arguments<'_>) -> bool {
        args.replace_errors(format!("{name} "));
        args.getall(&mut self.port)
    }

    fn ratio(&mut self, _name: &str, args: &mut Arguments<'_>) -> bool {
        args.get_into(&mut self.ratio)
    }

    fn workers(&mut self, _name: &str, args: &mut Arguments<'_>) -> bool {
        args.getall(&mut self.workers)
    }

    fn verbose(&mut self, _name: &str, _args: &mut Arguments<'_>) -> bool {
        self.verbose = true;
        true
    }
}

#[test]
fn test_process_argv() {
    let argv = ["server", "bind", "0.0.0.0", "8080", "-v", "--ratio=0.75", "-w", "4"];
    let mut args = Arguments::from_argv(&argv);
    let mut server = Server::default();
    assert!(args.parse(&mut server, &Server::PARAMS), "{}", args.errors());
    assert_eq!(server.host, "0.0.0.0");
    assert_eq!(server.port, 8080);
    assert!(server.verbose);
    assert_eq!(server.ratio, 0.75);
    assert_eq!(server.workers, Some(4));
    assert_eq!(args.state(), CursorState::Exhausted);
}

#[test]
fn test_config_text() {
    let config = "\
# server.conf
listen localhost 9000   # primary
--verbose
--port=9001             # overrides the port above
";
    let tokens = split_into_tokens(config.to_string());
    assert_eq!(tokens.len(), 5);
    let mut args = tokens.args();
    let mut server = Server::default();
    assert!(args.parse(&mut server, &Server::PARAMS), "{}", args.errors());
    assert_eq!(server.host, "localhost");
    assert_eq!(server.port, 9001);
    assert!(server.verbose);
}

#[test]
fn test_headings_are_never_dispatched() {
    let argv = ["Network:"];
    let mut args = Arguments::new(&argv);
    assert!(!args.parse(&mut Server::default(), &Server::PARAMS));
    assert_eq!(
        args.errors(),
        "Unknown verb 'Network:' expected one of: Network: listen --port= --ratio= workers --verbose"
    );
}

#[test]
fn test_range_error_from_inline_value() {
    let argv = ["--port=70000"];
    let mut args = Arguments::new(&argv);
    let mut server = Server::default();
    assert!(!args.parse(&mut server, &Server::PARAMS));
    assert_eq!(
        args.errors(),
        "--port= expects number in range [0..65535] in place of '70000'"
    );
    assert_eq!(server.port, 0);
}

#[test]
fn test_float_error() {
    let argv = ["--ratio=half"];
    let mut args = Arguments::new(&argv);
    assert!(!args.parse(&mut Server::default(), &Server::PARAMS));
    assert_eq!(
        args.errors(),
        "expects floating point value in place of 'half'"
    );
}

#[test]
fn test_positional_values_after_parse() {
    // an empty token ends dispatch and leaves the rest to the caller
    let argv = ["-v", "", "42", "answer"];
    let mut args = Arguments::new(&argv);
    let mut server = Server::default();
    assert!(args.parse(&mut server, &Server::PARAMS));
    assert!(args.contains("answer"));

    let (mut number, mut word) = (0u64, String::new());
    assert!(args.getall((&mut number, &mut word)));
    assert_eq!((number, word.as_str()), (42, "answer"));
    assert!(args.is_empty());
}

#[test]
fn test_reuse_after_clearing_errors() {
    let argv = ["-p", "nope", "-p", "80"];
    let mut args = Arguments::new(&argv);
    let mut server = Server::default();
    assert!(!args.parse(&mut server, &Server::PARAMS));
    assert_eq!(args.errors(), "-p expects number in place of 'nope'");

    let previous = args.replace_errors(String::new());
    assert!(previous.starts_with("-p expects"));
    // the bad value is still next in line; skip it and carry on
    assert_eq!(args.get(), "nope");
    assert!(args.parse(&mut server, &Server::PARAMS), "{}", args.errors());
    assert_eq!(server.port, 80);
}

#[test]
fn test_help_output() {
    let help = Help::new(&Server::PARAMS).to_string();
    let lines: Vec<_> = help.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "Network:   - ");
    assert_eq!(lines[1], "listen     - host and port to bind");
    assert_eq!(lines[2], "    Aliases: -l bind");
}
