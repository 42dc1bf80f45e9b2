//! Macros for ergonomic configuration construction.

/// Build a [`Config`](crate::Config) from a declarative table.
///
/// State and event names are written as identifiers. States appear in
/// declaration order; a state with an empty body is a sink.
///
/// # Example
///
/// ```
/// use rewind::fsm_config;
///
/// let config = fsm_config! {
///     initial: idle,
///     idle { start => running },
///     running { pause => paused, stop => done },
///     paused { resume => running },
///     done {},
/// };
///
/// assert_eq!(config.initial, "idle");
/// assert_eq!(config.states.len(), 4);
/// assert_eq!(config.target("running", "pause").unwrap(), "paused");
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:ident,
        $(
            $state:ident {
                $( $event:ident => $target:ident ),* $(,)?
            }
        ),* $(,)?
    ) => {
        $crate::Config::new(stringify!($initial))
            $(
                .with_state(
                    stringify!($state),
                    $crate::StateDefinition::new()
                        $( .on(stringify!($event), stringify!($target)) )*
                )
            )*
    };
}
