//! Small talk

use regex::Captures;

use super::Context;
use crate::core::Reply;
use crate::output::format_capabilities;

const JOKES: &[&str] = &[
    "Why don't scientists trust atoms? Because they make up everything!",
    "What did the grape say when it got stepped on? Nothing, it just let out a little wine!",
    "Why did the scarecrow win an award? He was outstanding in his field!",
    "What do you call a bear with no teeth? A gummy bear!",
    "Why did the cookie go to the doctor? Because it was feeling crumbly!",
];

const FUN_FACTS: &[&str] = &[
    "Honey never spoils. Archaeologists have found pots of honey in ancient Egyptian tombs that are over 3,000 years old!",
    "Cows have best friends and get stressed when separated from them.",
    "The first oranges weren't orange! The original oranges from Southeast Asia were actually green.",
    "A day on Venus is longer than its year! Venus takes 243 Earth days to rotate on its axis.",
    "Penguins propose to their life mates with a pebble!",
];

const HOBBIES: &[&str] = &[
    "I love learning new things! What about you?",
    "I enjoy processing data and helping people. It's kind of my thing!",
    "Chatting with humans is definitely one of my favorite activities!",
    "I find solving problems and helping people quite fulfilling!",
    "I'm passionate about making tasks easier for humans. It's my purpose!",
];

const MOOD_GOOD: &[&str] = &[
    "That's wonderful to hear!",
    "Awesome! Keep that positive energy!",
    "Great! Your good mood is contagious!",
];

const MOOD_BAD: &[&str] = &[
    "I'm sorry to hear that. Tomorrow will be better!",
    "Remember, every cloud has a silver lining!",
    "Hang in there! Things will improve!",
];

const MOOD_OKAY: &[&str] = &[
    "Sometimes okay is perfectly fine!",
    "That's alright, steady and stable is good!",
    "Nothing wrong with being okay!",
];

const GREETINGS: &[&str] = &[
    "Hello! How can I help you today?",
    "Hi there! Always nice to chat with you!",
    "Hey! What's on your mind?",
    "Greetings! How can I assist you?",
    "Hi! Ready to help whenever you need!",
];

pub(crate) fn how_are_you(_ctx: &mut Context<'_>, _caps: &Captures<'_>) -> Reply {
    Reply::text("I'm doing great, thanks for asking! I'm always happy to chat and help. How are you?")
}

pub(crate) fn mood_good(ctx: &mut Context<'_>, _caps: &Captures<'_>) -> Reply {
    Reply::text(ctx.rotate(MOOD_GOOD))
}

pub(crate) fn mood_bad(ctx: &mut Context<'_>, _caps: &Captures<'_>) -> Reply {
    Reply::text(ctx.rotate(MOOD_BAD))
}

pub(crate) fn mood_okay(ctx: &mut Context<'_>, _caps: &Captures<'_>) -> Reply {
    Reply::text(ctx.rotate(MOOD_OKAY))
}

pub(crate) fn joke(ctx: &mut Context<'_>, _caps: &Captures<'_>) -> Reply {
    Reply::text(ctx.rotate(JOKES))
}

pub(crate) fn fun_fact(ctx: &mut Context<'_>, _caps: &Captures<'_>) -> Reply {
    Reply::text(ctx.rotate(FUN_FACTS))
}

pub(crate) fn hobbies(ctx: &mut Context<'_>, _caps: &Captures<'_>) -> Reply {
    Reply::text(ctx.rotate(HOBBIES))
}

pub(crate) fn capabilities(ctx: &mut Context<'_>, _caps: &Captures<'_>) -> Reply {
    Reply::text(format_capabilities(&ctx.config.name))
}

pub(crate) fn favorite(_ctx: &mut Context<'_>, _caps: &Captures<'_>) -> Reply {
    Reply::text(
        "That's a tricky one for an AI! I appreciate all kinds of things but I especially enjoy our conversations and helping you out!",
    )
}

pub(crate) fn thanks(_ctx: &mut Context<'_>, _caps: &Captures<'_>) -> Reply {
    Reply::text("You're welcome! It's my pleasure to help!")
}

pub(crate) fn greeting(ctx: &mut Context<'_>, _caps: &Captures<'_>) -> Reply {
    Reply::text(ctx.rotate(GREETINGS))
}
