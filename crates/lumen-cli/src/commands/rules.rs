use lumen_enforce::RuleSet;
use lumen_output::{OutputFormatter, RulesReport};

/// Run `lumen rules` -- list the built-in rules in evaluation order.
pub fn run(formatter: &dyn OutputFormatter) -> i32 {
    let report = RulesReport::new(&RuleSet::builtin());
    print!("{}", formatter.format_rules(&report));
    0
}
