//! Integration tests for the log-line parser.
#![expect(clippy::expect_used, reason = "tests assert successful parsing paths")]

use apache_log_regex::{HumanReadable, LogParser, ParseError, ParsedRecord, Preset};
use rstest::{fixture, rstest};

const COMBINED: &str = r#"%h %l %u %t \"%r\" %>s %b \"%{Referer}i\" \"%{User-Agent}i\""#;

const LINE: &str = r#"212.74.15.68 - - [23/Jan/2004:11:36:20 +0000] "GET /images/previous.png HTTP/1.1" 200 2607 "http://peterhi.dyndns.org/bandwidth/index.html" "Mozilla/5.0 (X11; U; Linux i686; en-US; rv:1.2) Gecko/20021202""#;

const LINE_WITH_SLASH_QUOTE_IN_REQUEST: &str = r#"212.74.15.68 - - [23/Jan/2004:11:36:20 +0000] "GET /images/previous.png=\" HTTP/1.1" 200 2607 "http://peterhi.dyndns.org/bandwidth/index.html" "Mozilla/5.0 (X11; U; Linux i686; en-US; rv:1.2) Gecko/20021202""#;

const LINE_WITH_SLASH_QUOTE_IN_REFERER: &str = r#"4.224.234.46 - - [20/Jul/2004:13:18:55 -0700] "GET /core/listing/pl_boat_detail.jsp?&units=Feet&checked_boats=1176818&slim=broker&&hosturl=giffordmarine&&ywo=giffordmarine& HTTP/1.1" 200 2888 "http://search.yahoo.com/bin/search?p=\"grady%20white%20306%20bimini\"" "Mozilla/4.0 (compatible; MSIE 6.0; Windows 98; YPC 3.0.3; yplus 4.0.00d)""#;

const LOG: &str = r#"87.18.183.252 - - [13/Aug/2008:00:50:49 -0700] "GET /blog/index.xml HTTP/1.1" 302 527 "-" "Feedreader 3.13 (Powered by Newsbrain)"
79.28.16.191 - - [13/Aug/2008:00:50:55 -0700] "GET /blog/public/2008/08/rss.png HTTP/1.1" 200 2097 "http://www.simonecarletti.com/blog/" "Mozilla/5.0 (Windows; U; Windows NT 5.1; it; rv:1.9.0.1) Gecko/2008070208 Firefox/3.0.1"
79.28.16.191 - - [13/Aug/2008:00:50:56 -0700] "GET /favicon.ico HTTP/1.1" 200 1486 "-" "Mozilla/5.0 (Windows; U; Windows NT 5.1; it; rv:1.9.0.1) Gecko/2008070208 Firefox/3.0.1"
69.150.40.169 - - [13/Aug/2008:00:51:06 -0700] "GET /blog/2007/05/17/simone-carletti/ HTTP/1.1" 200 6787 "http://www.google.com/search?q=simone+carletti" "Mozilla/4.0 (compatible; MSIE 7.0; Windows NT 6.0; SLCC1)"
217.220.110.75 - - [13/Aug/2008:00:51:07 -0700] "GET /blog/feed/ HTTP/1.1" 200 7025 "-" "Mozilla/5.0 (Windows; U; Windows NT 5.1; it; rv:1.9.0.1) Gecko/2008070208 Firefox/3.0.1"
this line does not belong to the log
"#;

#[fixture]
fn combined() -> LogParser {
    LogParser::new(COMBINED).expect("combined format should compile")
}

fn assert_fields(record: &ParsedRecord, expected: &[(&str, &str)]) {
    for (key, value) in expected {
        assert_eq!(record.get(key), Some(*value), "unexpected value for `{key}`");
    }
}

#[rstest]
fn exposes_compiled_pattern(combined: LogParser) {
    let escaped = r#""([^"\\]*(?:\\.[^"\\]*)*)""#;
    assert_eq!(
        combined.regex().as_str(),
        format!(r"^(\S*) (\S*) (\S*) (\[[^\]]+\]) {escaped} (\S*) (\S*) {escaped} {escaped}$")
    );
    assert_eq!(combined.format(), COMBINED);
}

#[rstest]
fn parses_combined_line(combined: LogParser) {
    let record = combined.parse(LINE).expect("line should match");
    assert_fields(
        &record,
        &[
            ("%h", "212.74.15.68"),
            ("%l", "-"),
            ("%u", "-"),
            ("%t", "[23/Jan/2004:11:36:20 +0000]"),
            ("%r", "GET /images/previous.png HTTP/1.1"),
            ("%>s", "200"),
            ("%b", "2607"),
            (
                "%{Referer}i",
                "http://peterhi.dyndns.org/bandwidth/index.html",
            ),
            (
                "%{User-Agent}i",
                "Mozilla/5.0 (X11; U; Linux i686; en-US; rv:1.2) Gecko/20021202",
            ),
        ],
    );
    assert_eq!(
        record.keys().collect::<Vec<_>>(),
        combined.field_names().iter().map(String::as_str).collect::<Vec<_>>()
    );
}

#[rstest]
fn keeps_escaped_quote_in_request(combined: LogParser) {
    let record = combined
        .parse(LINE_WITH_SLASH_QUOTE_IN_REQUEST)
        .expect("line should match");
    assert_eq!(record.get("%r"), Some(r#"GET /images/previous.png=\" HTTP/1.1"#));
}

#[rstest]
fn keeps_escaped_quotes_in_referer(combined: LogParser) {
    let record = combined
        .parse(LINE_WITH_SLASH_QUOTE_IN_REFERER)
        .expect("line should match");
    assert_fields(
        &record,
        &[
            ("%h", "4.224.234.46"),
            ("%t", "[20/Jul/2004:13:18:55 -0700]"),
            ("%b", "2888"),
            (
                "%{Referer}i",
                r#"http://search.yahoo.com/bin/search?p=\"grady%20white%20306%20bimini\""#,
            ),
            (
                "%{User-Agent}i",
                "Mozilla/4.0 (compatible; MSIE 6.0; Windows 98; YPC 3.0.3; yplus 4.0.00d)",
            ),
        ],
    );
}

#[rstest]
fn skips_foreign_lines_in_a_log(combined: LogParser) {
    let hosts: Vec<String> = LOG
        .lines()
        .filter_map(|line| combined.parse(line))
        .filter_map(|record| record.get("%h").map(str::to_owned))
        .collect();
    assert_eq!(
        hosts,
        [
            "87.18.183.252",
            "79.28.16.191",
            "79.28.16.191",
            "69.150.40.169",
            "217.220.110.75"
        ]
    );
}

#[test]
fn parses_common_log_format() {
    let parser = LogParser::from_preset(Preset::Common, &apache_log_regex::Identity)
        .expect("common format should compile");
    let record = parser
        .parse(r#"212.74.15.68 - - [23/Jan/2004:11:36:20 +0000] "GET /images/previous.png HTTP/1.1" 200 2607"#)
        .expect("line should match");
    let pairs: Vec<(String, String)> = record.into();
    let expected = [
        ("%h", "212.74.15.68"),
        ("%l", "-"),
        ("%u", "-"),
        ("%t", "[23/Jan/2004:11:36:20 +0000]"),
        ("%r", "GET /images/previous.png HTTP/1.1"),
        ("%>s", "200"),
        ("%b", "2607"),
    ]
    .map(|(key, value)| (key.to_owned(), value.to_owned()));
    assert_eq!(pairs, expected);
}

#[rstest]
fn foreign_line_is_absent_or_strict_error(combined: LogParser) {
    assert!(combined.parse("foobar").is_none());
    let err = combined
        .parse_strict("foobar")
        .expect_err("strict parsing should fail");
    assert_eq!(
        err,
        ParseError {
            format: COMBINED.to_owned(),
            line: "foobar".to_owned(),
        }
    );
    assert!(err.to_string().starts_with("invalid format"));
}

#[rstest]
#[case(LINE)]
#[case(LINE_WITH_SLASH_QUOTE_IN_REFERER)]
#[case("foobar")]
#[case("")]
fn strict_and_lenient_parsing_agree(combined: LogParser, #[case] line: &str) {
    assert_eq!(combined.parse(line), combined.parse_strict(line).ok());
    assert_eq!(combined.parse(line), combined.parse(line));
}

#[test]
fn quoted_plain_field_rejects_embedded_quote() {
    let parser = LogParser::new(r#"%h \"%{Cookie}i\""#).expect("format should compile");
    assert!(parser.parse(r#"10.0.0.1 "a=1; b=\"2\"""#).is_none());
    let record = parser
        .parse(r#"10.0.0.1 "a=1; b=2""#)
        .expect("line should match");
    assert_eq!(record.get("%{Cookie}i"), Some("a=1; b=2"));
}

#[rstest]
#[case("%h", 1)]
#[case(r#"%h %l %u %t \"%r\" %>s %b"#, 7)]
#[case(COMBINED, 9)]
#[case("%h %h %h", 3)]
#[case(r#"%v:%p %h %{%d/%b/%Y}t %U %T \"%{X-Forwarded-For}i\""#, 6)]
fn one_capture_group_per_token(#[case] format: &str, #[case] tokens: usize) {
    let parser = LogParser::new(format).expect("format should compile");
    assert_eq!(parser.field_names().len(), tokens);
    assert_eq!(parser.regex().captures_len(), tokens + 1);
}

#[test]
fn round_trips_values_of_every_token_class() {
    let parser = LogParser::new(r#"%h %{%d/%b/%Y}t %U \"%r\" \"%{X-Trace}i\" %>s"#)
        .expect("format should compile");
    let values = [
        "::1",
        "[01/Feb/2024]",
        "/with space/index.html",
        r#"GET /q?x=\"y\" HTTP/2"#,
        "trace id",
        "204",
    ];
    let [host, time, path, request, trace, status] = values;
    let line = format!(r#"{host} {time} {path} "{request}" "{trace}" {status}"#);
    let record = parser.parse(&line).expect("line should match");
    assert_eq!(record.values().collect::<Vec<_>>(), values);
}

#[test]
fn url_path_only_format() {
    let parser = LogParser::new("%U").expect("format should compile");
    let record = parser.parse("/only/path").expect("line should match");
    assert_eq!(record.iter().collect::<Vec<_>>(), [("%U", "/only/path")]);
}

#[rstest]
fn renames_fields_without_changing_matching(combined: LogParser) {
    let human = LogParser::with_namer(COMBINED, &HumanReadable).expect("format should compile");
    assert_eq!(human.regex().as_str(), combined.regex().as_str());
    let record = human.parse(LINE).expect("line should match");
    assert_fields(
        &record,
        &[
            ("host", "212.74.15.68"),
            ("request", "GET /images/previous.png HTTP/1.1"),
            ("status", "200"),
            ("bytes_sent", "2607"),
            ("user_agent", "Mozilla/5.0 (X11; U; Linux i686; en-US; rv:1.2) Gecko/20021202"),
        ],
    );
}

#[test]
fn shared_parser_serves_many_threads() {
    let parser = LogParser::new("%h %>s").expect("format should compile");
    std::thread::scope(|scope| {
        for status in ["200", "301", "404", "500"] {
            let parser = &parser;
            scope.spawn(move || {
                let record = parser
                    .parse(&format!("10.0.0.1 {status}"))
                    .expect("line should match");
                assert_eq!(record.get("%>s"), Some(status));
            });
        }
    });
}
