use crate::fragment::{CityServiceTemplate, Fragment};

pub const HERO: &[Fragment<CityServiceTemplate>] = &[
    Fragment::Template(|city, service| {
        format!("Professional {service} in {city}, finished in a single visit and ready to use the next day.")
    }),
    Fragment::Template(|city, service| {
        format!("{city} homeowners book us for {service} because we show up on time, quote honestly and leave a flawless finish.")
    }),
    Fragment::Template(|city, service| {
        format!("Looking for {service} near {city}? Skip the remodel and get a like-new surface for a fraction of the cost.")
    }),
    Fragment::Template(|city, service| {
        format!("Fast, clean and affordable {service} for homes and rentals throughout {city}.")
    }),
    Fragment::Template(|city, service| {
        format!("Restore instead of replace: our {city} team specializes in {service} that looks factory-new.")
    }),
    Fragment::Template(|city, service| {
        format!("Trusted {service} in {city} with a written warranty and flat-rate pricing.")
    }),
    Fragment::Template(|city, service| {
        format!("Give your bathroom a fresh start. {service} for {city} homes, usually completed in under a day.")
    }),
];

pub const ABOUT: &[Fragment<CityServiceTemplate>] = &[
    Fragment::Template(|city, service| {
        format!("Our {service} process begins with a careful inspection, then deep cleaning, repairs and a bonding primer before the final topcoat. Every {city} job follows the same checklist.")
    }),
    Fragment::Template(|city, service| {
        format!("We have completed {service} projects in every corner of {city}, from older cast-iron fixtures to modern fiberglass units.")
    }),
    Fragment::Template(|_, service| {
        format!("{service} costs far less than a replacement and avoids demolition, plumbing changes and weeks of disruption.")
    }),
    Fragment::Template(|city, service| {
        format!("Landlords and homeowners around {city} rely on our {service} to refresh a bathroom between tenants or before a sale.")
    }),
    Fragment::Template(|_, service| {
        format!("Every {service} job is handled start to finish by one trained technician, so nothing gets lost between the quote and the final coat.")
    }),
    Fragment::Literal("We protect the surrounding room, ventilate while we work and clean up completely before we leave."),
];

pub const WHY_CHOOSE: &[Fragment<CityServiceTemplate>] = &[
    Fragment::Template(|city, service| {
        format!("We focus on {service}, and {city} customers notice the difference in the finish.")
    }),
    Fragment::Template(|_, service| {
        format!("Every {service} comes with a written warranty and a technician you can call directly.")
    }),
    Fragment::Template(|city, _| {
        format!("Flexible scheduling across {city}, including weekend appointments for busy households.")
    }),
    Fragment::Literal("Licensed, insured and never subcontracted: the person who quotes your job does the work."),
    Fragment::Template(|city, service| {
        format!("Clear, flat-rate pricing for {service} in {city} with no surprise charges after the job.")
    }),
];

pub const FEATURES: &[Fragment<CityServiceTemplate>] = &[
    Fragment::Template(|_, service| format!("{service} completed in one visit")),
    Fragment::Template(|city, _| format!("Free estimates anywhere in {city}")),
    Fragment::Literal("Written warranty included"),
    Fragment::Literal("Low-odor, fast-curing materials"),
    Fragment::Literal("Chip, crack and rust repair"),
    Fragment::Template(|_, service| format!("Flat-rate {service} pricing")),
    Fragment::Literal("Licensed and insured"),
    Fragment::Literal("Ready to use within 24 hours"),
    Fragment::Literal("Custom color matching"),
    Fragment::Literal("No demolition required"),
];
