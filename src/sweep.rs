/* Enumerate target files and fan out editor processes
 *
 * Each batch of substitution rules is applied by external stream editors
 * rewriting files in place. The file list is split into contiguous chunks
 * and every chunk gets its own editor process; the chunks are disjoint, so
 * no two workers ever touch the same file within a batch. All of a batch's
 * workers are spawned together and joined before the caller moves on.
 *
 * A worker failing is captured and reported, never fatal: the operator is
 * expected to watch the run and re-run it after fixing the tree.
 *
 * (c) Chris Williams, 2021.
 *
 * See LICENSE for usage and copying.
 */

use std::path::PathBuf;
use std::process::{ Command, Stdio };

use walkdir::WalkDir;
use wildmatch::WildMatch;

/* the stream editor every rule expression is written for */
const EDITOR: &str = "perl";

/* what became of one editor invocation */
pub struct WorkerReport
{
    worker: usize,
    file_count: usize,
    exit_code: Option<i32>, /* None if the process never ran or died to a signal */
    stderr: String
}

impl WorkerReport
{
    pub fn succeeded(&self) -> bool { self.exit_code == Some(0) }
    pub fn get_exit_code(&self) -> Option<i32> { self.exit_code }
    pub fn get_stderr(&self) -> &String { &self.stderr }

    /* one stderr line summarizing a failed worker */
    pub fn describe(&self) -> String
    {
        let status = match self.exit_code
        {
            Some(code) => format!("exit code {}", code),
            None => String::from("no exit code")
        };

        match self.stderr.trim().is_empty()
        {
            true => format!("worker {} ({} file(s)) failed: {}", self.worker, self.file_count, status),
            false => format!("worker {} ({} file(s)) failed: {}: {}", self.worker, self.file_count, status, self.stderr.trim())
        }
    }
}

/* walk the tree under root and return every regular file whose name matches
   one of the include patterns. entries the walker can't read are skipped:
   this sweep is best-effort by design */
pub fn enumerate_files(root: &String, include: &Vec<String>) -> Vec<PathBuf>
{
    let patterns = include.iter().map(|p| WildMatch::new(p)).collect::<Vec<WildMatch>>();
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
    {
        let entry = match entry
        {
            Ok(e) => e,
            Err(_) => continue
        };

        if !entry.file_type().is_file()
        {
            continue;
        }

        let name = match entry.file_name().to_str()
        {
            Some(n) => n,
            None => continue
        };

        if patterns.iter().any(|p| p.matches(name))
        {
            files.push(entry.path().to_path_buf());
        }
    }

    files
}

/* apply one batch's expression to the whole file list: chunk the list,
   spawn an editor per chunk, and block until every worker is done */
pub fn apply_expression(expression: &str, files: &[PathBuf], files_per_worker: usize) -> Vec<WorkerReport>
{
    let mut commands = Vec::new();
    for chunk in files.chunks(files_per_worker)
    {
        commands.push((editor_command(expression, chunk), chunk.len()));
    }

    run_workers(commands)
}

/* build one in-place editor invocation over a chunk of files */
fn editor_command(expression: &str, files: &[PathBuf]) -> Command
{
    let mut command = Command::new(EDITOR);
    command.arg("-i").arg("-pe").arg(expression);
    for file in files
    {
        command.arg(file);
    }
    command
}

/* spawn every command at once, then join them in order, capturing each
   worker's exit status and stderr. a command that can't even spawn becomes
   a report too, rather than killing the run */
fn run_workers(commands: Vec<(Command, usize)>) -> Vec<WorkerReport>
{
    let mut children = Vec::new();
    for (worker, (mut command, file_count)) in commands.into_iter().enumerate()
    {
        /* editors must only read the files they were given: never stdin */
        command.stdin(Stdio::null()).stderr(Stdio::piped());

        match command.spawn()
        {
            Ok(child) => children.push((worker, file_count, Some(child), String::new())),
            Err(e) => children.push((worker, file_count, None, format!("can't spawn {}: {}", EDITOR, e)))
        }
    }

    let mut reports = Vec::new();
    for (worker, file_count, child, spawn_error) in children
    {
        let report = match child
        {
            Some(child) => match child.wait_with_output()
            {
                Ok(output) => WorkerReport
                {
                    worker,
                    file_count,
                    exit_code: output.status.code(),
                    stderr: String::from_utf8_lossy(&output.stderr).to_string()
                },
                Err(e) => WorkerReport
                {
                    worker,
                    file_count,
                    exit_code: None,
                    stderr: format!("can't collect worker: {}", e)
                }
            },
            None => WorkerReport { worker, file_count, exit_code: None, stderr: spawn_error }
        };

        reports.push(report);
    }

    reports
}

/* tell the operator about any worker that didn't come back clean */
pub fn report_failures(reports: &Vec<WorkerReport>)
{
    for report in reports
    {
        if !report.succeeded()
        {
            eprintln!("{}", report.describe());
        }
    }
}
