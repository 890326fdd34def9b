pub mod shared {
    pub mod core {
        pub mod clock_time;
    }
    pub mod infrastructure {
        pub mod debounce;
    }
}

pub mod modules {
    pub mod timetable {
        pub mod core {
            pub mod decision;
            pub mod entry;
            pub mod mutations;
            pub mod ports;
            pub mod sequence;
            pub mod state;
        }
        pub mod use_cases {
            pub mod application_error;
            pub mod commit;
            pub mod add_entry {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_entry {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod edit_entry_field {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod reorder_entries {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod set_open_time {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_timetable {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod identity;
            }
            pub mod outbound {
                pub mod timetable_store;
                pub mod timetable_store_in_memory;
            }
        }
        pub mod session;
    }
}

pub mod shell;
