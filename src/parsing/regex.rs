use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // A damage line can carry several comma-separated ranges, each optionally
    // followed by a parenthesized augmented range, e.g.
    // "Physical Damage: 12-34 (augmented), 5-9"
    pub static ref RE_DAMAGE_LINE: Regex = Regex::new(r"(?P<dtype>\w+) Damage:\s*(?P<ranges>(?:\d+-\d+(?:\s*\([^)]+\))?(?:,\s*)?)+)").unwrap();
    pub static ref RE_DAMAGE_RANGE: Regex = Regex::new(r"(?P<min>\d+)-(?P<max>\d+)").unwrap();
    pub static ref RE_PARENTHESIZED: Regex = Regex::new(r"\([^)]*\)").unwrap();
    pub static ref RE_ATTACK_SPEED: Regex = Regex::new(r"Attacks per Second:\s*(?P<speed>[\d.]+)").unwrap();
    pub static ref RE_QUALITY: Regex = Regex::new(r"Quality:\s*\+(?P<quality>\d+)%").unwrap();
}
