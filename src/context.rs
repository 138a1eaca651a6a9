/* Centralize all the context we can about a particular run of the tool
 *
 * A run performs exactly one job: either extract a symbol mapping file,
 * or bulk-rename symbols across a source tree. The command-line parser
 * builds one of these structures and main() acts on it.
 *
 * (c) Chris Williams, 2021.
 *
 * See LICENSE for usage and copying.
 */

pub type Filename = String;

/* the two jobs this tool knows how to perform */
#[derive(Clone)]
pub enum Job
{
    /* read the configured symbol dumps and write the mapping file */
    Extract,

    /* rewrite the tree under target_root, renaming the defined
       symbols listed in symbol_file */
    Rename
    {
        symbol_file: Filename,
        target_root: Filename
    }
}

/* this is what we're working with: one job plus the run-wide switches */
#[derive(Clone)]
pub struct Context
{
    job: Job,
    config_file: Option<Filename>, /* this can be set at any time */
    dry_run: bool                  /* print substitution expressions instead of executing them */
}

impl Context
{
    pub fn new(job: Job) -> Context
    {
        Context
        {
            job,

            /* leave the rest as run defaults */
            config_file: None,
            dry_run: false
        }
    }

    /* functions to update and access the run context */
    pub fn set_config_file(&mut self, path: &String)
    {
        self.config_file = Some(path.clone());
    }

    pub fn set_dry_run(&mut self)
    {
        self.dry_run = true;
    }

    pub fn get_job(&self) -> Job { self.job.clone() }
    pub fn get_config_file(&self) -> Option<String> { self.config_file.clone() }
    pub fn is_dry_run(&self) -> bool { self.dry_run }
}
