pub mod demo_authenticator;
