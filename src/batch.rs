/* Order symbols and group them into substitution batches
 *
 * The rename job folds many symbols into each external editor call to
 * amortize the process startup cost. This module derives the renameable
 * symbol list from a dump, sorts it longest-name-first, slices it into
 * fixed-size batches, and compiles each batch into one combined
 * substitution expression.
 *
 * (c) Chris Williams, 2021.
 *
 * See LICENSE for usage and copying.
 */

use indexmap::IndexSet;

use super::config;
use super::dump::SymbolRecord;

/* derive the ordered list of names to rename. a name is taken the first
   time it appears on a defined record, and a name already seen on ANY
   earlier line is never taken: a symbol that first shows up as an
   undefined reference stays untouched even if a later record defines it,
   because the host binary resolves that name externally.

   the final list is longest-name-first. whole-word matching should make
   ordering immaterial, but a shorter name that prefixes a longer one must
   never be substituted first, so the sort is kept as a guard against
   malformed boundary matches. the sort is stable: equal lengths keep
   their first-seen order, so the batch layout is reproducible */
pub fn collect_symbols(records: &Vec<SymbolRecord>) -> Vec<String>
{
    let mut seen: IndexSet<String> = IndexSet::new();
    let mut symbols: Vec<String> = Vec::new();

    for record in records
    {
        if record.is_defined() && !seen.contains(record.get_name())
        {
            symbols.push(record.get_name().clone());
        }
        seen.insert(record.get_name().clone());
    }

    symbols.sort_by(|a, b| b.len().cmp(&a.len()));
    symbols
}

/* a consecutive run of symbols destined for one editor invocation */
pub struct Batch
{
    symbols: Vec<String>
}

impl Batch
{
    pub fn get_symbols(&self) -> &Vec<String> { &self.symbols }

    /* compile this batch into a single perl substitution program: one
       whole-word rule per symbol, rules separated by semicolons. each rule
       refuses to match an occurrence immediately followed by a .h token,
       so an include-file stem that happens to equal a symbol name keeps
       its filename */
    pub fn expression(&self) -> String
    {
        let mut rules = Vec::new();
        for symbol in &self.symbols
        {
            rules.push(format!("s/\\b({})\\b(?!\\.h\\b)/{}$1/g", symbol, config::NAMESPACE_PREFIX));
        }
        rules.join(";")
    }
}

/* slice the ordered symbol list into batches of at most batch_size names.
   the final batch takes whatever is left over */
pub fn partition(symbols: Vec<String>, batch_size: usize) -> Vec<Batch>
{
    symbols.chunks(batch_size)
        .map(|chunk| Batch { symbols: chunk.to_vec() })
        .collect()
}

#[cfg(test)]
mod tests
{
    use super::*;
    use super::super::dump;

    fn records_for(dump_lines: Vec<&str>) -> Vec<SymbolRecord>
    {
        let lines = dump_lines.iter().map(|l| l.to_string()).collect();
        let (records, _) = dump::parse_dump(&lines);
        records
    }

    #[test]
    fn symbols_come_out_longest_first()
    {
        let records = records_for(vec![ "1 T a", "2 T ccc", "3 T bb" ]);
        assert_eq!(collect_symbols(&records), vec![ "ccc", "bb", "a" ]);
    }

    #[test]
    fn undefined_references_are_never_collected()
    {
        let records = records_for(vec![ "1 T fooBar", "2 U externRef" ]);
        assert_eq!(collect_symbols(&records), vec![ "fooBar" ]);
    }

    #[test]
    fn a_name_first_seen_undefined_stays_untouched()
    {
        /* the U line marks the name as seen, so the later definition
           must not resurrect it */
        let records = records_for(vec![ "1 U fooBar", "2 T fooBar", "3 T other_x" ]);
        assert_eq!(collect_symbols(&records), vec![ "other_x" ]);
    }

    #[test]
    fn repeated_definitions_are_taken_once()
    {
        let records = records_for(vec![ "1 T fooBar", "2 T fooBar", "3 D fooBar" ]);
        assert_eq!(collect_symbols(&records), vec![ "fooBar" ]);
    }

    #[test]
    fn equal_lengths_keep_first_seen_order()
    {
        let records = records_for(vec![ "1 T bbb", "2 T aaa", "3 T ccc" ]);
        assert_eq!(collect_symbols(&records), vec![ "bbb", "aaa", "ccc" ]);
    }

    #[test]
    fn partition_covers_every_symbol_exactly_once()
    {
        let symbols = (0..13).map(|n| format!("sym{:02}", n)).collect::<Vec<String>>();
        let batches = partition(symbols.clone(), 4);

        /* ceil(13 / 4) = 4 batches, sized 4, 4, 4, 1 */
        assert_eq!(batches.len(), 4);
        assert_eq!(batches[3].get_symbols().len(), 1);

        let mut replayed = Vec::new();
        for batch in &batches
        {
            replayed.extend(batch.get_symbols().clone());
        }
        assert_eq!(replayed, symbols);
    }

    #[test]
    fn two_per_batch_splits_ccc_bb_then_a()
    {
        let records = records_for(vec![ "1 T a", "2 T bb", "3 T ccc" ]);
        let batches = partition(collect_symbols(&records), 2);

        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].get_symbols(), &vec![ String::from("ccc"), String::from("bb") ]);
        assert_eq!(batches[1].get_symbols(), &vec![ String::from("a") ]);
    }

    #[test]
    fn expression_anchors_each_rule_on_word_boundaries()
    {
        let batches = partition(vec![ String::from("fooBar"), String::from("a") ], 64);
        let expression = batches[0].expression();

        assert_eq!(expression,
            "s/\\b(fooBar)\\b(?!\\.h\\b)/VpsimNamespace_$1/g;s/\\b(a)\\b(?!\\.h\\b)/VpsimNamespace_$1/g");
    }

    #[test]
    fn empty_symbol_list_yields_no_batches()
    {
        let batches = partition(Vec::new(), 64);
        assert_eq!(batches.len(), 0);
    }
}
