use crate::fragment::{CityServiceTemplate, Fragment};

// Review templates receive the city and the service the reviewer is talking about.
pub const TEMPLATES: &[Fragment<CityServiceTemplate>] = &[
    Fragment::Template(|_, service| {
        format!("We had {service} done last month and the bathroom looks brand new. The technician was on time and explained every step.")
    }),
    Fragment::Template(|city, service| {
        format!("Best {service} in {city}, hands down. Fair price and the finish is perfect.")
    }),
    Fragment::Template(|_, service| {
        format!("I was about to replace our old tub, but the {service} saved us thousands. Highly recommend.")
    }),
    Fragment::Template(|city, _| {
        format!("Friendly, professional and tidy. Easily the most reliable contractor we have hired in {city}.")
    }),
    Fragment::Template(|_, service| {
        format!("They squeezed us in the same week for {service} before our tenants moved in. Great communication throughout.")
    }),
    Fragment::Literal("The fumes were minimal and we were using the shower the next evening. Couldn't be happier with the result."),
    Fragment::Template(|city, service| {
        format!("Got three quotes for {service} in {city} and these folks were the most thorough. Work came out even better than expected.")
    }),
    Fragment::Template(|_, service| {
        format!("Our {service} still looks perfect a year later. Worth every penny.")
    }),
    Fragment::Literal("Quick to respond, honest about what could and could not be fixed, and the quality speaks for itself."),
    Fragment::Template(|city, _| {
        format!("Second time using them for a property in {city}. Consistent, careful work both times.")
    }),
];

pub const FIRST_NAMES: &[&str] = &[
    "Sarah", "Michael", "Jennifer", "David", "Emily", "James", "Jessica", "Robert", "Ashley",
    "Daniel", "Amanda", "Chris", "Megan", "Kevin", "Laura", "Brian", "Rachel", "Jason", "Nicole",
    "Eric", "Karen", "Steven", "Linda", "Mark",
];

pub const LAST_INITIALS: &[char] = &[
    'A', 'B', 'C', 'D', 'G', 'H', 'K', 'L', 'M', 'P', 'R', 'S', 'T', 'W',
];

pub const SUB_SERVICES: &[&str] = &[
    "bathtub refinishing",
    "shower refinishing",
    "tile reglazing",
    "tub and tile reglazing",
    "countertop refinishing",
    "chip repair",
    "fiberglass tub repair",
    "clawfoot tub restoration",
];

pub const MONTHS_AGO: &[u32] = &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];
