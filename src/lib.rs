pub mod shared {
    pub mod infrastructure {
        pub mod message_store;
    }
}

pub mod modules {
    pub mod messages {
        pub mod core {
            pub mod stream_state;
        }
        pub mod use_cases {
            pub mod append_message {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod delete_message {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_messages {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod queries_port;
            }
            pub mod greet {
                pub mod greeting;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod stream_messages {
                pub mod inbound {
                    pub mod graphql;
                }
                pub mod producer;
            }
        }
    }
}

pub mod shell;
