/* Parse the run configuration file format
 *
 *
 * (c) Chris Williams, 2021.
 *
 * See LICENSE for usage and copying.
 */

use serde_derive::Deserialize;

/* every defined symbol is renamed to this marker followed by its original
   name. it is a fixed literal for the whole run: the host build's source
   references the prefixed names directly, so it is not a config knob */
pub const NAMESPACE_PREFIX: &str = "VpsimNamespace_";

#[derive(Clone)]
#[derive(Deserialize)]
pub struct Config
{
    extract: Extract,
    rename: Rename
}

impl Config
{
    pub fn get_extract(&self) -> &Extract { &self.extract }
    pub fn get_rename(&self) -> &Rename { &self.rename }
}

/* settings for the extract job: which dumps to read, where to write the mapping */
#[derive(Clone)]
#[derive(Deserialize)]
pub struct Extract
{
    inputs: Vec<String>,
    output: String
}

impl Extract
{
    pub fn get_inputs(&self) -> &Vec<String> { &self.inputs }
    pub fn get_output(&self) -> &String { &self.output }
}

/* settings for the rename job. estimated_file_count is only a hint used to
   size each worker's share of the tree: it is not a live directory count,
   and a low estimate simply means more concurrent editor processes */
#[derive(Clone)]
#[derive(Deserialize)]
pub struct Rename
{
    parallelism: usize,
    patterns_per_batch: usize,
    estimated_file_count: usize,
    include: Vec<String>
}

impl Rename
{
    pub fn get_parallelism(&self) -> usize { self.parallelism }
    pub fn get_patterns_per_batch(&self) -> usize { self.patterns_per_batch }
    pub fn get_estimated_file_count(&self) -> usize { self.estimated_file_count }
    pub fn get_include(&self) -> &Vec<String> { &self.include }

    /* number of files handed to each editor process within a batch */
    pub fn get_files_per_worker(&self) -> usize
    {
        let per_worker = (self.estimated_file_count + self.parallelism - 1) / self.parallelism;
        std::cmp::max(per_worker, 1)
    }
}

/* load the given file into memory and parse it, returning a config structure */
pub fn parse_config(filename: &String) -> Config
{
    let config_contents = match std::fs::read_to_string(filename)
    {
        Ok(c) => c,
        Err(e) => fatal_msg!("Can't read configuration file {}: {}", filename, e)
    };

    match toml::from_str(config_contents.as_str())
    {
        Ok(c) => c,
        Err(e) => fatal_msg!("Can't parse configuration file {}: {}", filename, e)
    }
}

/* generate a basic, default configuration. absent a configuration file, we'll
   use what's below. if a config file is specified, these defaults are discarded */
pub fn default_config() -> Config
{
    Config
    {
        /* the Vpsim build dumps its archive's symbol table to NmRawSyms and
           keeps the resulting mapping next to it for operator inspection */
        extract: Extract
        {
            inputs: vec![ String::from("NmRawSyms") ],
            output: String::from("SymsTranslation")
        },

        /* defaults sized for the Vpsim tree: roughly a hundred files to
           rewrite and several thousand symbols to fold into expressions */
        rename: Rename
        {
            parallelism: 8,
            patterns_per_batch: 64,
            estimated_file_count: 101,
            include: vec![ String::from("*") ]
        }
    }
}
