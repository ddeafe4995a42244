//! Table expansion. One `proc_table!` invocation declares a tier's slots and
//! is the single source of truth for the struct, the population walk, and the
//! per-slot visitor, so a slot cannot be declared without being populated.

macro_rules! proc_table {
    (
        $(#[$table_meta:meta])*
        pub struct $table:ident {
            $(
                $(#[$slot_meta:meta])*
                $slot:ident => $name:literal,
            )+
        }
    ) => {
        $(#[$table_meta])*
        #[derive(Clone, Default)]
        pub struct $table {
            $(
                $(#[$slot_meta])*
                pub $slot: Option<$crate::FnVoidFunction>,
            )+
        }

        impl $table {
            /// Overwrites every declared slot with the resolver's answer for
            /// that slot's entry point name. Total: a failed resolution is
            /// recorded as `None`, never reported.
            pub(crate) fn resolve<F>(mut resolve: F) -> Self
            where
                F: FnMut(&::std::ffi::CStr) -> Option<$crate::FnVoidFunction>,
            {
                let mut table = Self::default();
                $(
                    $(#[$slot_meta])*
                    {
                        table.$slot = resolve($name);
                    }
                )+
                table
            }

            /// Visits every declared (name, slot) pair exactly once. The
            /// visitation order is unspecified.
            pub fn for_each_slot<F>(&self, mut f: F)
            where
                F: FnMut(&'static ::std::ffi::CStr, Option<$crate::FnVoidFunction>),
            {
                $(
                    $(#[$slot_meta])*
                    {
                        f($name, self.$slot);
                    }
                )+
            }

            /// Names of the declared entry points that are currently
            /// unresolved.
            pub fn unresolved_names(&self) -> Vec<&'static ::std::ffi::CStr> {
                let mut names = Vec::new();
                self.for_each_slot(|name, slot| {
                    if slot.is_none() {
                        names.push(name);
                    }
                });
                names
            }
        }
    };
}

pub(crate) use proc_table;
