/* vpsim-symtool
 *
 * Build-time tool that renames Vpsim's global symbols so the library can be
 * statically linked into a host binary without symbol collisions
 *
 * Syntax: vpsim-symtool [options] extract
 *         vpsim-symtool [options] rename <symbol file> <target directory>
 *
 * It accepts the following command-line arguments:
 *
 * -T <config>      Read run settings from configuration file <config>
 * --dry-run        Print each batch's substitution expression instead of executing it
 *
 * --help           Display minimal usage information
 * --version        Display version information
 *
 * The extract job reads the symbol-table dumps named in the configuration and
 * writes a mapping file of originalName prefixedName pairs. The rename job
 * reads a symbol-table dump and rewrites every matching file under the target
 * directory in place, prefixing each defined symbol with the Vpsim namespace
 * marker. Both jobs expect dumps as plain text, one record per line, with
 * three whitespace-separated fields: address, type code, symbol name.
 *
 * (c) Chris Williams, 2021.
 *
 * See LICENSE for usage and copying.
 */

extern crate toml;
extern crate serde;
extern crate serde_derive;
extern crate indexmap;
extern crate wildmatch;
extern crate walkdir;

#[macro_use]
mod debug;   /* status and fatal-error macros */
mod cmd;     /* command-line parser */
mod context; /* describe the requested job */
mod config;  /* configuration file parser */
mod dump;    /* parse symbol-table dump lines */
mod extract; /* emit the symbol mapping file */
mod batch;   /* order symbols and group them into substitution batches */
mod sweep;   /* enumerate target files and fan out editor processes */
mod rename;  /* drive the batch-by-batch rewrite */

fn main()
{
    /* find out what needs to be done from command line arguments */
    let context = cmd::parse_args();

    /* settings come from the built-in defaults unless a config file was given */
    let config = match context.get_config_file()
    {
        Some(f) => config::parse_config(&f),
        None => config::default_config()
    };

    match context.get_job()
    {
        context::Job::Extract => extract::run(config.get_extract()),
        context::Job::Rename { symbol_file, target_root } =>
            rename::run(config.get_rename(), &symbol_file, &target_root, context.is_dry_run())
    }
}

/* generic function to load a file into a list of lines, or bail on error */
pub fn load_file_into_lines(filename: &String) -> Vec<String>
{
    match std::fs::read_to_string(filename)
    {
        Ok(s) => s.lines().map(|l| l.to_string()).collect(),
        Err(e) => fatal_msg!("Cannot read symbol file {}: {}", filename, e)
    }
}
