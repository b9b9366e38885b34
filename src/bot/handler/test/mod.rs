mod announce;
mod relay;
mod tryout;
