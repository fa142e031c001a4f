//! State identifiers

use core::fmt::Debug;

/// Identifier of one state of one machine
///
/// `ALL` must list every value of the type. Startup validation checks that
/// each one has a registered handler, which is what makes dispatch total.
/// Use [`states!`](crate::states) to derive this for a plain enum.
pub trait StateId: Copy + Eq + Debug + 'static {
    /// Every state, in declaration order
    const ALL: &'static [Self];

    /// Name for logs and diagnostics
    fn name(&self) -> &'static str;
}

/// Declare a state enum and implement [`StateId`] for it
///
/// ```
/// use tickwork_core::states;
/// use tickwork_core::machine::StateId;
///
/// states! {
///     /// Lamp controller
///     pub enum Lamp {
///         Off,
///         WaitOn,
///         On,
///     }
/// }
///
/// assert_eq!(Lamp::ALL.len(), 3);
/// assert_eq!(Lamp::WaitOn.name(), "WaitOn");
/// ```
#[macro_export]
macro_rules! states {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::machine::StateId for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),*];

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
