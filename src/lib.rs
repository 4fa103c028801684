//! Round-half-up rounding of integers and durations, to a step or to a
//! number of significant decimal digits.

pub mod configuration;

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod pow10;
    pub mod roundhalfup;
    pub mod round;
}

pub mod roundingrule;

pub mod roundingrulemanager;

pub mod time {
    pub mod duration;
    pub mod roundduration;
}
