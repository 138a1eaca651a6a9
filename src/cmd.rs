/* vpsim-symtool command-line parser
 *
 * (c) Chris Williams, 2021.
 *
 * See LICENSE for usage and copying.
 */

use super::context::{ Context, Job };

/* use a state machine to analyze command line args */
enum State
{
    ExpectingAnything,
    ExpectingConfigFile
}

/* convert command-line arguments into a native context structure */
pub fn parse_args() -> Context
{
    let mut state = State::ExpectingAnything;
    let mut config_file: Option<String> = None;
    let mut dry_run = false;
    let mut positionals: Vec<String> = Vec::new();

    /* get the command-line arguments as a list of strings, skipping
    the first argument because it's just the program name */
    let arg_array = std::env::args().collect::<Vec<String>>().split_off(1);
    let args = arg_array.as_slice();
    if args.len() == 0
    {
        /* no arguments? bail out with a message hinting at what we'd expect */
        usage_die();
    }

    for arg in args
    {
        match state
        {
            /* argument could be a switch or a positional word for the job.
               figure out which it is, and either change state to handle
               the switch or queue the word up for job selection below */
            State::ExpectingAnything =>
            {
                match parse_single_arg(arg)
                {
                    (true, Some(s)) => state = s,
                    (true, None) => dry_run = true, /* the only stateless switch is --dry-run */
                    (false, _) => positionals.push(arg.clone())
                }
            },

            /* the argument is expected to be the run config filename */
            State::ExpectingConfigFile =>
            {
                config_file = Some(arg.clone());
                state = State::ExpectingAnything;
            }
        }
    }

    /* a trailing -T with no filename is as bad as no job at all */
    if let State::ExpectingConfigFile = state
    {
        usage_die();
    }

    /* the first positional word selects the job; the rest belong to it.
       a wrong word count is a usage error before any work is performed */
    let job = match positionals.split_first()
    {
        Some((word, rest)) => match (word.as_str(), rest)
        {
            ("extract", []) => Job::Extract,
            ("rename", [symbol_file, target_root]) => Job::Rename
            {
                symbol_file: symbol_file.clone(),
                target_root: target_root.clone()
            },
            (_, _) => usage_die()
        },
        None => usage_die()
    };

    let mut context = Context::new(job);
    if let Some(f) = config_file
    {
        context.set_config_file(&f);
    }
    if dry_run
    {
        context.set_dry_run();
    }

    context
}

/* attempt to parse a single argument and return whether or not the arg
   was successfully parsed, and the new state of the parser */
fn parse_single_arg(arg: &String) -> (bool, Option<State>)
{
    /* display minimal help and exit */
    if arg == "--help" { usage_die() }

    /* display version information */
    if arg == "--version" { version_die() }

    /* next command line argument must be the config filename */
    if arg == "-T" { return (true, Some(State::ExpectingConfigFile)) }

    /* print substitution expressions rather than running them */
    if arg == "--dry-run" { return (true, None) }

    return (false, None) /* nothing handled and no change to state */
}

/* software information and error messages */
fn version_die() -> !
{
    eprintln!("vpsim-symtool {} by {}", env!("CARGO_PKG_VERSION"), env!("CARGO_PKG_AUTHORS"));
    std::process::exit(1);
}

fn usage_die() -> !
{
    eprintln!("Usage: {} [options] extract", env!("CARGO_BIN_NAME"));
    eprintln!("       {} [options] rename <symbol file> <target directory>", env!("CARGO_BIN_NAME"));
    std::process::exit(1);
}
