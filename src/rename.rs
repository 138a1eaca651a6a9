/* Drive the batch-by-batch rewrite of the target tree
 *
 * Batches run strictly one after another: a batch's editor processes are
 * all joined before the next batch starts, so a file rewritten by several
 * batches is never touched by two of them at once. Within a batch the
 * file partition is disjoint, so there is no write-write race there
 * either. The whole run is supervised: worker failures are reported and
 * tolerated, and the operator re-runs the step if the tree ends up wrong.
 *
 * (c) Chris Williams, 2021.
 *
 * See LICENSE for usage and copying.
 */

use super::batch;
use super::config::Rename;
use super::dump;
use super::sweep;

/* run the rename job over the tree under target_root, renaming the defined
   symbols listed in symbol_file. in a dry run the substitution expressions
   are printed for inspection and nothing is rewritten */
pub fn run(settings: &Rename, symbol_file: &String, target_root: &String, dry_run: bool)
{
    /* both settings feed divisions and chunk sizes, so zero means a broken config */
    if settings.get_parallelism() == 0 || settings.get_patterns_per_batch() == 0
    {
        fatal_msg!("parallelism and patterns_per_batch must both be at least 1");
    }

    let lines = super::load_file_into_lines(symbol_file);
    let (records, skipped) = dump::parse_dump(&lines);
    dump::report_skipped(symbol_file, skipped);

    let symbols = batch::collect_symbols(&records);
    if symbols.is_empty()
    {
        report_msg!("No renameable symbols in {}", symbol_file);
        return;
    }

    let mut progress = Progress::new(symbols.len());
    let batches = batch::partition(symbols, settings.get_patterns_per_batch());

    /* renaming a whole tree is slow, so give the operator a sense of scale */
    let files_per_worker = settings.get_files_per_worker();
    report_msg!("{} file(s) per worker", files_per_worker);

    for batch in &batches
    {
        /* progress tracks how far through the symbol list the plan has
           got, not how much of the tree has been rewritten */
        for _ in batch.get_symbols()
        {
            if let Some(percent) = progress.fold()
            {
                report_msg!("{}%", percent);
            }
        }

        let expression = batch.expression();
        if dry_run
        {
            report_msg!("Dry run: {}", expression);
            continue;
        }

        /* the tree is enumerated fresh for every batch, so files that
           appear or vanish mid-run are picked up on the next batch */
        let files = sweep::enumerate_files(target_root, settings.get_include());
        if files.is_empty()
        {
            eprintln!("No files to rewrite under {}", target_root);
            continue;
        }

        /* fan out this batch's editors and wait for all of them */
        let reports = sweep::apply_expression(&expression, &files, files_per_worker);
        sweep::report_failures(&reports);
    }
}

/* coarse planning-progress meter: one integer percentage, printed at most
   once per distinct value reached */
struct Progress
{
    total: usize,
    count: usize,
    last_percent: usize
}

impl Progress
{
    pub fn new(total: usize) -> Progress
    {
        Progress { total, count: 0, last_percent: 0 }
    }

    /* account for one symbol folded into a batch. returns the percentage
       to show if it moved to a value not yet printed */
    pub fn fold(&mut self) -> Option<usize>
    {
        self.count = self.count + 1;
        let percent = self.count * 100 / self.total;

        if percent != self.last_percent
        {
            self.last_percent = percent;
            return Some(percent);
        }

        None
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn three_symbols_report_thirds()
    {
        let mut progress = Progress::new(3);
        assert_eq!(progress.fold(), Some(33));
        assert_eq!(progress.fold(), Some(66));
        assert_eq!(progress.fold(), Some(100));
    }

    #[test]
    fn a_single_symbol_jumps_straight_to_done()
    {
        let mut progress = Progress::new(1);
        assert_eq!(progress.fold(), Some(100));
    }

    #[test]
    fn each_percentage_shows_exactly_once()
    {
        let mut progress = Progress::new(200);
        let mut shown = Vec::new();

        for _ in 0..200
        {
            if let Some(percent) = progress.fold()
            {
                shown.push(percent);
            }
        }

        /* two symbols per percent: every value from 1 to 100 appears once,
           in order, and 0% is never announced */
        assert_eq!(shown, (1..=100).collect::<Vec<usize>>());
    }

    #[test]
    fn more_symbols_than_percentages_stays_monotonic()
    {
        let mut progress = Progress::new(7);
        let mut shown = Vec::new();

        for _ in 0..7
        {
            if let Some(percent) = progress.fold()
            {
                shown.push(percent);
            }
        }

        assert_eq!(shown, vec![ 14, 28, 42, 57, 71, 85, 100 ]);
    }
}
