// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod CTAButton;
pub mod Card;
pub mod ContactForm;
pub mod Footer;
pub mod Header;
pub mod HeroHeader;
pub mod Page;
pub mod Section;

// Section components
pub mod sections {
    pub mod Contact;
    pub mod Faq;
    pub mod HowItWorks;
    pub mod Pricing;
    pub mod UseCases;
    pub mod ValueProps;
}

pub use CTAButton::*;
pub use Card::*;
pub use ContactForm::*;
pub use Footer::*;
pub use Header::*;
pub use HeroHeader::*;
pub use Page::*;
pub use Section::*;
