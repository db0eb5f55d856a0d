// Crate entry point. Declares the module tree so tests and the shell binary can reach it.
//
// Responsibilities
// - Only declare and expose modules. No layout logic here.

pub mod shared {
    pub mod core {
        pub mod clock;
        pub mod primitives;
    }
    pub mod config;
}

pub mod modules {
    pub mod schedule {
        pub mod core {
            pub mod deviation;
            pub mod filters;
            pub mod ports;
            pub mod shift;
            pub mod size_class;
        }
        pub mod use_cases {
            pub mod build_fact_index {
                pub mod handler;
            }
            pub mod group_rows {
                pub mod handler;
            }
            pub mod timeline_grid {
                pub mod handler;
            }
            pub mod layout_row {
                pub mod geometry;
                pub mod handler;
                pub mod overlap;
            }
            pub mod render_schedule {
                pub mod handler;
                pub mod memo;
            }
            pub mod persist_filters {
                pub mod handler;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod preferences_in_memory;
            }
        }
    }
}

pub mod shell;
