pub mod shared {
    pub mod infrastructure {
        pub mod local_store;
        pub mod notifier;
    }
}

pub mod modules {
    pub mod rsvps {
        pub mod core {
            pub mod entry;
            pub mod guest_count;
            pub mod guest_list;
            pub mod sheet;
        }
        pub mod use_cases {
            pub mod submit_rsvp {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod form_port;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod sync_guest_list {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod sheet_port;
            }
            pub mod local_entries {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod google_form;
                pub mod google_sheet;
                pub mod in_memory_form;
                pub mod in_memory_sheet;
                pub mod local_entries;
            }
        }
    }
}

pub mod shell;
