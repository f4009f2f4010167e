//! Aplenty: routing machine parts through named workflows.
//!
//! Part 1 sends each listed part through the workflows. Part 2 sends whole
//! boxes of ratings instead, splitting a box at every rule that cuts
//! through it, and counts the rating combinations that end up accepted.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use gridwalk_core::ParseError;

use crate::error::PuzzleError;
use crate::runner::Solution;

/// The workflow every part enters first.
pub const ENTRY: &str = "in";
/// Every category rating lies in this range in part 2.
pub const RATING_RANGE: RangeInclusive<u32> = 1..=4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    X,
    M,
    A,
    S,
}

impl Category {
    fn from_char(c: char) -> Option<Self> {
        match c {
            'x' => Some(Category::X),
            'm' => Some(Category::M),
            'a' => Some(Category::A),
            's' => Some(Category::S),
            _ => None,
        }
    }
}

/// Ratings in `x`, `m`, `a`, `s` order.
pub type Part = [u32; 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Less,
    Greater,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Accept,
    Reject,
    /// Index into [`System::workflows`].
    Workflow(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub category: Category,
    pub comparison: Comparison,
    pub value: u32,
    pub target: Target,
}

/// Inclusive bounds; `lo > hi` never survives a split.
type Span = (u32, u32);

impl Rule {
    fn matches(&self, part: &Part) -> bool {
        let rating = part[self.category as usize];
        match self.comparison {
            Comparison::Less => rating < self.value,
            Comparison::Greater => rating > self.value,
        }
    }

    /// Cut `(lo, hi)` into the spans that do and don't satisfy the rule.
    fn split(&self, (lo, hi): Span) -> (Option<Span>, Option<Span>) {
        let v = self.value;
        match self.comparison {
            Comparison::Less => (
                (v > lo).then(|| (lo, hi.min(v - 1))),
                (v <= hi).then(|| (lo.max(v), hi)),
            ),
            Comparison::Greater => (
                (v < hi).then(|| (lo.max(v + 1), hi)),
                (v >= lo).then(|| (lo, hi.min(v))),
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workflow {
    pub name: String,
    pub rules: Vec<Rule>,
    /// Where parts go when no rule matches.
    pub fallback: Target,
}

#[derive(Debug, Clone)]
pub struct System {
    pub workflows: Vec<Workflow>,
    pub parts: Vec<Part>,
    entry: usize,
}

impl System {
    pub fn parse(text: &str) -> Result<Self, PuzzleError> {
        let lines: Vec<(usize, &str)> = text.lines().map(str::trim).enumerate().collect();
        let split = lines
            .iter()
            .position(|(_, l)| l.is_empty())
            .unwrap_or(lines.len());
        let (flows, parts) = lines.split_at(split);
        let flows: Vec<(usize, &str, &str)> = flows
            .iter()
            .map(|&(i, line)| {
                line.strip_suffix('}')
                    .and_then(|l| l.split_once('{'))
                    .filter(|(name, _)| !name.is_empty())
                    .map(|(name, body)| (i, name, body))
                    .ok_or_else(|| ParseError::line(i, "expected name{rules}"))
            })
            .collect::<Result<_, _>>()?;
        if flows.is_empty() {
            return Err(ParseError::Empty.into());
        }

        let mut index = HashMap::with_capacity(flows.len());
        for (k, &(i, name, _)) in flows.iter().enumerate() {
            if index.insert(name, k).is_some() {
                return Err(ParseError::line(i, format!("workflow {name:?} defined twice")).into());
            }
        }
        let resolve = |name: &str| match name {
            "A" => Ok(Target::Accept),
            "R" => Ok(Target::Reject),
            _ => index
                .get(name)
                .map(|&k| Target::Workflow(k))
                .ok_or_else(|| PuzzleError::MissingWorkflow(name.to_string())),
        };

        let mut workflows = Vec::with_capacity(flows.len());
        for &(i, name, body) in &flows {
            let mut steps: Vec<&str> = body.split(',').collect();
            let fallback = match steps.pop() {
                Some(last) if !last.contains(':') => resolve(last)?,
                _ => return Err(ParseError::line(i, "last rule must be a bare target").into()),
            };
            let rules = steps
                .into_iter()
                .map(|step| parse_rule(i, step, &resolve))
                .collect::<Result<Vec<_>, _>>()?;
            workflows.push(Workflow {
                name: name.to_string(),
                rules,
                fallback,
            });
        }
        let entry = *index
            .get(ENTRY)
            .ok_or_else(|| PuzzleError::MissingWorkflow(ENTRY.to_string()))?;

        let parts = parts
            .iter()
            .filter(|(_, l)| !l.is_empty())
            .map(|&(i, line)| parse_part(i, line))
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("{} workflows, {} parts", workflows.len(), parts.len());
        Ok(Self {
            workflows,
            parts,
            entry,
        })
    }

    /// Whether `part` ends up accepted.
    pub fn accepts(&self, part: &Part) -> Result<bool, PuzzleError> {
        let mut current = self.entry;
        // A route that visits more workflows than exist has looped.
        for _ in 0..=self.workflows.len() {
            let flow = &self.workflows[current];
            let target = flow
                .rules
                .iter()
                .find(|r| r.matches(part))
                .map_or(flow.fallback, |r| r.target);
            match target {
                Target::Accept => return Ok(true),
                Target::Reject => return Ok(false),
                Target::Workflow(next) => current = next,
            }
        }
        Err(PuzzleError::WorkflowCycle(self.workflows[current].name.clone()))
    }

    /// Number of rating combinations within `RATING_RANGE` that are accepted.
    pub fn accepted_combinations(&self) -> Result<u64, PuzzleError> {
        let full = (*RATING_RANGE.start(), *RATING_RANGE.end());
        let mut stack = vec![(self.entry, [full; 4], 0)];
        let mut total = 0u64;
        while let Some((current, mut spans, depth)) = stack.pop() {
            let flow = &self.workflows[current];
            if depth > self.workflows.len() {
                return Err(PuzzleError::WorkflowCycle(flow.name.clone()));
            }
            let mut send = |target: Target, spans: [Span; 4]| match target {
                Target::Accept => {
                    total += spans
                        .iter()
                        .map(|&(lo, hi)| u64::from(hi - lo + 1))
                        .product::<u64>();
                }
                Target::Reject => {}
                Target::Workflow(next) => stack.push((next, spans, depth + 1)),
            };

            let mut open = true;
            for rule in &flow.rules {
                let c = rule.category as usize;
                let (matching, remaining) = rule.split(spans[c]);
                if let Some(span) = matching {
                    let mut taken = spans;
                    taken[c] = span;
                    send(rule.target, taken);
                }
                match remaining {
                    Some(span) => spans[c] = span,
                    None => {
                        open = false;
                        break;
                    }
                }
            }
            if open {
                send(flow.fallback, spans);
            }
        }
        Ok(total)
    }
}

fn parse_rule(
    index: usize,
    step: &str,
    resolve: &impl Fn(&str) -> Result<Target, PuzzleError>,
) -> Result<Rule, PuzzleError> {
    let bad = || ParseError::line(index, format!("malformed rule {step:?}"));
    let (test, target) = step.split_once(':').ok_or_else(bad)?;
    let mut chars = test.chars();
    let category = chars.next().and_then(Category::from_char).ok_or_else(bad)?;
    let comparison = match chars.next() {
        Some('<') => Comparison::Less,
        Some('>') => Comparison::Greater,
        _ => return Err(bad().into()),
    };
    let value = chars.as_str().parse().map_err(|_| bad())?;
    Ok(Rule {
        category,
        comparison,
        value,
        target: resolve(target)?,
    })
}

fn parse_part(index: usize, line: &str) -> Result<Part, ParseError> {
    let bad = || ParseError::line(index, "expected {x=..,m=..,a=..,s=..}");
    let body = line
        .strip_prefix('{')
        .and_then(|l| l.strip_suffix('}'))
        .ok_or_else(bad)?;
    let mut part = [None::<u32>; 4];
    for field in body.split(',') {
        let (key, value) = field.split_once('=').ok_or_else(bad)?;
        let mut key = key.chars();
        let category = match (key.next().and_then(Category::from_char), key.next()) {
            (Some(c), None) => c,
            _ => return Err(bad()),
        };
        let slot = &mut part[category as usize];
        if slot.is_some() {
            return Err(ParseError::line(index, "rating given twice"));
        }
        *slot = Some(value.parse().map_err(|_| bad())?);
    }
    let [Some(x), Some(m), Some(a), Some(s)] = part else {
        return Err(ParseError::line(index, "missing a rating"));
    };
    Ok([x, m, a, s])
}

pub struct Day19;

impl Solution for Day19 {
    const DAY: u8 = 19;
    const TITLE: &'static str = "Aplenty";
    type Input = System;
    type Answer = u64;

    fn parse(text: &str) -> Result<System, PuzzleError> {
        System::parse(text)
    }

    fn part1(system: &System) -> Result<u64, PuzzleError> {
        let mut sum = 0;
        for part in &system.parts {
            if system.accepts(part)? {
                sum += part.iter().map(|&r| u64::from(r)).sum::<u64>();
            }
        }
        Ok(sum)
    }

    fn part2(system: &System) -> Result<u64, PuzzleError> {
        system.accepted_combinations()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SYSTEM: &str = "\
px{a<2006:qkq,m>2090:A,rfg}
pv{a>1716:R,A}
lnx{m>1548:A,A}
rfg{s<537:gd,x>2440:R,A}
qs{s>3448:A,lnx}
qkq{x<1416:A,crn}
crn{x>2662:A,R}
in{s<1351:px,qqz}
qqz{s>2770:qs,m<1801:hdj,R}
gd{a>3333:R,R}
hdj{m>838:A,pv}

{x=787,m=2655,a=1222,s=2876}
{x=1679,m=44,a=2067,s=496}
{x=2036,m=264,a=79,s=2244}
{x=2461,m=1339,a=466,s=291}
{x=2127,m=1623,a=2188,s=1013}
";

    #[test]
    fn example_parts() {
        let system = Day19::parse(SYSTEM).unwrap();
        assert_eq!(system.workflows.len(), 11);
        let accepted: Vec<bool> = system
            .parts
            .iter()
            .map(|p| system.accepts(p).unwrap())
            .collect();
        assert_eq!(accepted, vec![true, false, true, false, true]);
        assert_eq!(Day19::part1(&system), Ok(19114));
        assert_eq!(Day19::part2(&system), Ok(167_409_079_868_000));
    }

    #[test]
    fn everything_or_nothing() {
        let all = Day19::parse("in{A}\n").unwrap();
        assert_eq!(all.accepted_combinations(), Ok(4000u64.pow(4)));
        let none = Day19::parse("in{x>0:R,A}\n").unwrap();
        assert_eq!(none.accepted_combinations(), Ok(0));
    }

    #[test]
    fn splits_at_the_edges() {
        // x < 1 matches nothing, x > 4000 matches nothing.
        let system = Day19::parse("in{x<1:R,x>4000:R,m<2:A,R}\n").unwrap();
        assert_eq!(system.accepted_combinations(), Ok(4000u64.pow(3)));
    }

    #[test]
    fn ranged_count_agrees_with_routing() {
        // Anything rated above 3 is rejected up front, so the ranged count
        // can be checked against routing every part in 1..=3.
        let system = Day19::parse(
            "in{x>3:R,m>3:R,a>3:R,s>3:R,cut}\n\
             cut{x<2:two,s>1:A,R}\n\
             two{m>1:R,a<3:A,R}\n",
        )
        .unwrap();
        let mut routed = 0;
        for x in 1..=3 {
            for m in 1..=3 {
                for a in 1..=3 {
                    for s in 1..=3 {
                        routed += system.accepts(&[x, m, a, s]).unwrap() as u64;
                    }
                }
            }
        }
        assert_eq!(routed, 42);
        assert_eq!(system.accepted_combinations(), Ok(routed));
    }

    #[test]
    fn missing_and_looping_workflows() {
        assert_eq!(
            Day19::parse("in{x<5:nowhere,A}\n").unwrap_err(),
            PuzzleError::MissingWorkflow("nowhere".into())
        );
        assert_eq!(
            Day19::parse("start{A}\n").unwrap_err(),
            PuzzleError::MissingWorkflow("in".into())
        );
        let looped = Day19::parse("in{x<5:b,A}\nb{a}\na{in}\n\n{x=1,m=1,a=1,s=1}\n").unwrap();
        assert!(matches!(Day19::part1(&looped), Err(PuzzleError::WorkflowCycle(_))));
        assert!(matches!(Day19::part2(&looped), Err(PuzzleError::WorkflowCycle(_))));
    }

    #[test]
    fn malformed_input() {
        assert!(Day19::parse("in{x<5:A}\n").is_err());
        assert!(Day19::parse("in{q<5:A,R}\n").is_err());
        assert!(Day19::parse("in{A}\nin{R}\n").is_err());
        assert!(Day19::parse("in{A}\n\n{x=1,m=2,a=3}\n").is_err());
        assert!(Day19::parse("in{A}\n\n{x=1,x=2,m=2,a=3}\n").is_err());
        assert!(Day19::parse("").is_err());
    }
}
