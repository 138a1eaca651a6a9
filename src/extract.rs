/* Emit the symbol mapping file
 *
 * Read each configured symbol-table dump, keep every defined symbol, and
 * overwrite the mapping file with one "originalName prefixedName" pair per
 * line. The pair set is insertion-ordered so the file is reproducible from
 * run to run; nothing downstream consumes it, it exists for the operator
 * to inspect what the rename job will touch.
 *
 * (c) Chris Williams, 2021.
 *
 * See LICENSE for usage and copying.
 */

use indexmap::IndexSet;

use super::config::{ self, Extract };
use super::dump::{ self, SymbolRecord };

/* run the extract job with the given settings */
pub fn run(settings: &Extract)
{
    let mut pairs: IndexSet<String> = IndexSet::new();

    for input in settings.get_inputs()
    {
        let lines = super::load_file_into_lines(input);
        let (records, skipped) = dump::parse_dump(&lines);
        dump::report_skipped(input, skipped);

        collect_pairs(&records, &mut pairs);
    }

    write_mapping(settings.get_output(), &pairs);
}

/* fold each defined record into the pair set. the set is keyed on the full
   emitted line, so a symbol recurring across dumps collapses to one entry */
fn collect_pairs(records: &Vec<SymbolRecord>, pairs: &mut IndexSet<String>)
{
    for record in records
    {
        if record.is_defined()
        {
            pairs.insert(format!("{} {}{}", record.get_name(),
                config::NAMESPACE_PREFIX, record.get_name()));
        }
    }
}

/* overwrite the mapping file with the collected pairs, one per line */
fn write_mapping(filename: &String, pairs: &IndexSet<String>)
{
    let mut contents = String::new();
    for pair in pairs
    {
        contents.push_str(pair);
        contents.push('\n');
    }

    if let Err(e) = std::fs::write(filename, contents)
    {
        fatal_msg!("Can't write mapping file {}: {}", filename, e);
    }
}
