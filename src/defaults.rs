//! Fixed identity, PIN literals, certificate file names and prompt texts.
//! CLI flags override the file names and cohort; the rest is compiled in.

pub struct Defaults;

impl Defaults {
    /* Identity */
    pub const RESERVED_IDENTITY: &'static str = "Najee Jeremiah";
    pub const ADMIN_PIN: &'static str = "1234";
    pub const REGULAR_PIN: &'static str = "ABCD";

    /* Certificates */
    pub const CERT_DIR: &'static str = ".";
    pub const DIRECTOR_CERT: &'static str = "director_certificate.html";
    pub const MEMBER_CERT: &'static str = "member_certificate.html";

    /* Branding */
    pub const COHORT: &'static str = "June";

    /* Prompts */
    pub const NAME_PROMPT: &'static str = "What's your name? ";
    pub const PIN_PROMPT: &'static str = "Please enter your PIN: ";
    pub const CERT_PROMPT: &'static str = "Would you like to see your certificate? (Y/N): ";
}
