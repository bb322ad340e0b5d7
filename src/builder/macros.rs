//! Macros for declaring a machine inline.

/// Declare a whole machine by state name and build it in one call.
///
/// Expands to an [`InlineBuilder`](crate::builder::InlineBuilder) chain and
/// evaluates to `Result<Machine<C>, BuildError>`. Without a `context:` entry
/// the machine starts from `C::default()`.
///
/// # Example
///
/// ```
/// use fsms::{inline_machine, Machine};
///
/// let mut jobs: Machine<u32> = inline_machine! {
///     name: "jobs",
///     initial: "PENDING",
///     states: ["PENDING", "READY", "RUNNING", "DONE"],
///     transitions: [
///         ("advance", "PENDING" => "READY"),
///         ("advance", "READY" => "RUNNING", action: |runs: &mut u32| *runs += 1),
///         ("advance", "RUNNING" => "DONE", guard: |runs: &mut u32| *runs > 0),
///     ],
/// }
/// .unwrap();
///
/// jobs.transition("advance");
/// jobs.transition("advance");
/// jobs.transition("advance");
/// assert!(jobs.is_in("DONE"));
/// ```
#[macro_export]
macro_rules! inline_machine {
    (
        name: $name:expr,
        initial: $initial:expr,
        states: [$($state:expr),* $(,)?],
        transitions: [
            $(
                ($event:expr, $source:expr => $target:expr
                    $(, guard: $guard:expr)?
                    $(, action: $action:expr)?
                    $(,)?)
            ),* $(,)?
        ]
        $(, context: $context:expr)?
        $(,)?
    ) => {{
        let builder = $crate::builder::InlineBuilder::new($name, $initial)
            $(.state($state))*
            $(
                .transition(
                    $crate::builder::TransitionSpec::new($event, $source, $target)
                        $(.guard($guard))?
                        $(.action($action))?
                )
            )*;
        $crate::inline_machine!(@build builder $(, $context)?)
    }};
    (@build $builder:ident) => {
        $builder.build()
    };
    (@build $builder:ident, $context:expr) => {
        $builder.build_with_context($context)
    };
}
