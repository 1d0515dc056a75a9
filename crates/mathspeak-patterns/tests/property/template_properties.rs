use mathspeak_patterns::Template;
use proptest::prelude::*;
use regex::Regex;

proptest! {
    #[test]
    fn backslash_free_templates_render_verbatim(literal in "[^\\\\]{0,40}") {
        let re = Regex::new("(.*)").unwrap();
        let caps = re.captures("anything").unwrap();
        let template = Template::parse(&literal);
        prop_assert_eq!(template.render(&caps), literal.clone());
        prop_assert_eq!(template.max_group(), None);
    }

    #[test]
    fn group_references_swap_captures(a in "[a-z]{1,8}", b in "[a-z]{1,8}") {
        let re = Regex::new(r"(\w+)-(\w+)").unwrap();
        let text = format!("{a}-{b}");
        let caps = re.captures(&text).unwrap();
        let numbered = Template::parse(r"\2 then \1");
        let named = Template::parse(r"\g<2> then \g<1>");
        prop_assert_eq!(numbered.render(&caps), format!("{b} then {a}"));
        prop_assert_eq!(named.render(&caps), format!("{b} then {a}"));
        prop_assert_eq!(numbered.max_group(), Some(2));
    }
}
