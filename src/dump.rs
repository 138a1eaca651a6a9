/* Parse symbol-table dump lines
 *
 * A dump is plain text, one record per line, three whitespace-separated
 * fields: address, type code, symbol name. Anything else on a line makes
 * the whole line malformed. Malformed lines never abort a run: they are
 * skipped, counted, and the count is reported so bad input is visible.
 *
 * (c) Chris Williams, 2021.
 *
 * See LICENSE for usage and copying.
 */

/* a symbol table entry as dumped by the archive's symbol lister */
#[derive(Clone, PartialEq, Debug)]
pub struct SymbolRecord
{
    address: String,
    type_code: String,
    name: String
}

impl SymbolRecord
{
    pub fn get_name(&self) -> &String { &self.name }
    pub fn get_type_code(&self) -> &String { &self.type_code }
    pub fn get_address(&self) -> &String { &self.address }

    /* an undefined symbol (type code U) is an external reference owned by
       some other module and must never be renamed */
    pub fn is_defined(&self) -> bool
    {
        !self.type_code.is_empty() && self.type_code != "U"
    }
}

/* the outcome of parsing one dump line */
#[derive(PartialEq, Debug)]
pub enum ParsedLine
{
    Record(SymbolRecord),
    Malformed(usize) /* number of fields actually found */
}

/* tokenize a single dump line into a record, or flag it as malformed */
pub fn parse_line(line: &str) -> ParsedLine
{
    let fields = line.split_whitespace().collect::<Vec<&str>>();
    match fields.as_slice()
    {
        [ address, type_code, name ] => ParsedLine::Record(SymbolRecord
        {
            address: address.to_string(),
            type_code: type_code.to_string(),
            name: name.to_string()
        }),
        other => ParsedLine::Malformed(other.len())
    }
}

/* parse a whole dump into its records plus a count of skipped lines */
pub fn parse_dump(lines: &Vec<String>) -> (Vec<SymbolRecord>, usize)
{
    let mut records = Vec::new();
    let mut skipped = 0;

    for line in lines
    {
        match parse_line(line)
        {
            ParsedLine::Record(r) => records.push(r),
            ParsedLine::Malformed(_) => skipped = skipped + 1
        }
    }

    (records, skipped)
}

/* let the operator know how much of the dump was unusable */
pub fn report_skipped(filename: &String, skipped: usize)
{
    if skipped > 0
    {
        eprintln!("Skipped {} malformed line(s) in {}", skipped, filename);
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn three_fields_parse_to_a_record()
    {
        match parse_line("0000000000001000 T fooBar")
        {
            ParsedLine::Record(r) =>
            {
                assert_eq!(r.get_address(), "0000000000001000");
                assert_eq!(r.get_type_code(), "T");
                assert_eq!(r.get_name(), "fooBar");
            },
            other => panic!("expected a record, got {:?}", other)
        }
    }

    #[test]
    fn tabs_and_repeated_spaces_are_still_three_fields()
    {
        match parse_line("1000\t\tT   fooBar")
        {
            ParsedLine::Record(r) => assert_eq!(r.get_name(), "fooBar"),
            other => panic!("expected a record, got {:?}", other)
        }
    }

    #[test]
    fn wrong_field_counts_are_malformed()
    {
        assert_eq!(parse_line(""), ParsedLine::Malformed(0));
        assert_eq!(parse_line("just-a-name"), ParsedLine::Malformed(1));
        assert_eq!(parse_line("1000 T"), ParsedLine::Malformed(2));
        assert_eq!(parse_line("1000 T fooBar extra"), ParsedLine::Malformed(4));
    }

    #[test]
    fn undefined_symbols_are_not_renameable()
    {
        match parse_line("0000 U externRef")
        {
            ParsedLine::Record(r) => assert_eq!(r.is_defined(), false),
            other => panic!("expected a record, got {:?}", other)
        }

        match parse_line("1000 T fooBar")
        {
            ParsedLine::Record(r) => assert_eq!(r.is_defined(), true),
            other => panic!("expected a record, got {:?}", other)
        }
    }

    #[test]
    fn a_dump_mixes_records_and_skips_without_aborting()
    {
        let lines = vec!
        [
            String::from("1000 T fooBar"),
            String::from("not a symbol line at all"),
            String::from("2000 U externRef"),
            String::from("")
        ];

        let (records, skipped) = parse_dump(&lines);
        assert_eq!(records.len(), 2);
        assert_eq!(skipped, 2);
        assert_eq!(records[0].get_name(), "fooBar");
        assert_eq!(records[1].get_name(), "externRef");
    }
}
