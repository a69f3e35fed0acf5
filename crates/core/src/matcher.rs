//! Short-circuiting dispatch over an ordered list of match rules.
//!
//! A table starts with its input unmatched and offers it to each rule in
//! declaration order. The first rule to produce a success wins and no later
//! rule is evaluated. A table only becomes callable as a total function once a
//! default is supplied through [`Match::otherwise`]; until then the only way
//! to run it is [`Match::attempt`], which reports a miss as a failure of the
//! original input.

use std::fmt;

use crate::Outcome;

/// A single dispatch rule: success means matched, failure passes the input on.
pub type Rule<I, O> = Box<dyn Fn(I) -> Outcome<O, I>>;

/// An ordered table of rules with no default yet.
#[must_use]
pub struct Match<I, O> {
    rules: Vec<Rule<I, O>>,
}

impl<I, O> Match<I, O> {
    /// Create an empty table.
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule. Rules are tried in the order they are added.
    pub fn when(mut self, rule: impl Fn(I) -> Outcome<O, I> + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Number of rules in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when the table has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run the rules against `input`, stopping at the first match.
    ///
    /// Returns the matched output as a success, or the untouched input as a
    /// failure when nothing matched.
    pub fn attempt(&self, input: I) -> Outcome<O, I> {
        let mut pending = input;
        for (index, rule) in self.rules.iter().enumerate() {
            match rule(pending).into_either() {
                either::Either::Left(output) => {
                    tracing::trace!(rule = index, "dispatch rule matched");
                    return Outcome::success(output);
                }
                either::Either::Right(unmatched) => pending = unmatched,
            }
        }
        Outcome::failure(pending)
    }

    /// Finish the table with the default applied when no rule matches.
    pub fn otherwise<D>(self, default: D) -> Dispatcher<I, O, D>
    where
        D: Fn(I) -> O,
    {
        Dispatcher {
            table: self,
            default,
        }
    }
}

impl<I, O> Default for Match<I, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, O> fmt::Debug for Match<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Match").field("rules", &self.rules.len()).finish()
    }
}

/// A complete dispatch table: rules plus a mandatory default.
pub struct Dispatcher<I, O, D> {
    table: Match<I, O>,
    default: D,
}

impl<I, O, D> Dispatcher<I, O, D>
where
    D: Fn(I) -> O,
{
    /// Dispatch `input`, falling back to the default when no rule matches.
    pub fn apply(&self, input: I) -> O {
        self.table.attempt(input).either(std::convert::identity, |unmatched| {
            tracing::trace!("no dispatch rule matched, applying default");
            (self.default)(unmatched)
        })
    }
}

impl<I, O, D> fmt::Debug for Dispatcher<I, O, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("rules", &self.table.len())
            .finish_non_exhaustive()
    }
}

/// Start a table bound to a single input value.
pub fn match_value<I, O>(input: I) -> BoundMatch<I, O> {
    BoundMatch {
        input,
        table: Match::new(),
    }
}

/// A table already holding its input; `otherwise` runs it immediately.
#[must_use]
pub struct BoundMatch<I, O> {
    input: I,
    table: Match<I, O>,
}

impl<I, O> BoundMatch<I, O> {
    /// Append a rule.
    pub fn when(self, rule: impl Fn(I) -> Outcome<O, I> + 'static) -> Self {
        Self {
            input: self.input,
            table: self.table.when(rule),
        }
    }

    /// Run the table, applying `default` to the input when nothing matched.
    pub fn otherwise(self, default: impl FnOnce(I) -> O) -> O {
        self.table
            .attempt(self.input)
            .either(std::convert::identity, default)
    }
}

impl<I: fmt::Debug, O> fmt::Debug for BoundMatch<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundMatch")
            .field("input", &self.input)
            .field("rules", &self.table.len())
            .finish()
    }
}
