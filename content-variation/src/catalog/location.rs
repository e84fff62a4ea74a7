use crate::fragment::Fragment;

pub const HERO: &[Fragment] = &[
    Fragment::Template(|city| {
        format!("{city} homeowners trust us to bring tired bathtubs and showers back to a like-new shine in a single day, without the mess of a full tear-out.")
    }),
    Fragment::Template(|city| {
        format!("Refinishing, reglazing and repair for bathrooms across {city}. Most jobs are done in one visit and ready to use within 24 hours.")
    }),
    Fragment::Template(|city| {
        format!("Why replace when you can restore? Our {city} crew refinishes tubs, tile and showers for a fraction of what a remodel costs.")
    }),
    Fragment::Literal("Chipped enamel, stained grout and dated colors are fixable. We restore bathroom surfaces to a durable, glossy finish that lasts for years."),
    Fragment::Template(|city| {
        format!("From older homes to new condos, we have refinished hundreds of bathrooms in and around {city}.")
    }),
    Fragment::Template(|city| {
        format!("Get a clean, bright bathroom back this week. Local bathtub and shower refinishing for {city} with upfront pricing.")
    }),
    Fragment::Literal("A new-looking tub at a fraction of the cost of replacement, installed by technicians who do this every single day."),
    Fragment::Template(|city| {
        format!("Serving {city} with fast, low-odor refinishing that keeps your bathroom out of commission for as little time as possible.")
    }),
];

pub const ABOUT: &[Fragment] = &[
    Fragment::Template(|city| {
        format!("We are a locally operated refinishing team that has worked in {city} for over a decade. Every job is prepped, sprayed and inspected by the same technician from start to finish.")
    }),
    Fragment::Literal("Our process starts with a deep clean and careful repair of chips and cracks, followed by a bonding primer and a professional-grade topcoat. The result is a smooth surface that resists stains and is easy to keep clean."),
    Fragment::Template(|city| {
        format!("Homes in {city} range from mid-century ranches to brand-new builds, and we have seen every kind of tub and tile. We match the right materials to your surface instead of using one product for everything.")
    }),
    Fragment::Literal("Refinishing keeps an old fixture out of the landfill and avoids the plumbing work of a replacement. Most customers are surprised how much of their original bathroom can be saved."),
    Fragment::Template(|city| {
        format!("Property managers and homeowners across {city} call us when a bathroom needs to look its best quickly, whether it is a rental turnover or a room that finally needs an update.")
    }),
    Fragment::Literal("We protect your floors and fixtures, ventilate the room while we work, and leave the space cleaner than we found it. You only need to keep the tub dry for a day."),
    Fragment::Template(|city| {
        format!("Our {city} technicians are trained in-house and carry the tools to handle porcelain, cast iron, fiberglass and acrylic in a single visit.")
    }),
];

pub const WHY_CHOOSE: &[Fragment] = &[
    Fragment::Template(|city| {
        format!("{city} customers choose us for clear quotes, on-time arrival and a written warranty on every refinish.")
    }),
    Fragment::Literal("We are fully licensed and insured, and we never subcontract the work. The technician who quotes your job is the one who does it."),
    Fragment::Template(|city| {
        format!("Fast scheduling across {city}: most appointments are available within the week, and most jobs are finished the same day.")
    }),
    Fragment::Literal("Refinishing typically costs a fraction of a replacement and takes hours instead of weeks. You get the new look without the renovation."),
    Fragment::Template(|city| {
        format!("Neighbors across {city} keep referring us, and we work hard to keep earning those referrals.")
    }),
    Fragment::Literal("Our coatings are low-odor and cure fast, so your household is back to normal by the next day."),
];

pub const FEATURES: &[Fragment] = &[
    Fragment::Literal("Same-day service on most jobs"),
    Fragment::Literal("Written warranty on every refinish"),
    Fragment::Literal("Licensed and insured technicians"),
    Fragment::Literal("Low-odor, fast-curing coatings"),
    Fragment::Template(|city| format!("Free on-site estimates in {city}")),
    Fragment::Literal("Chip and crack repair included"),
    Fragment::Literal("Color matching for tile and fixtures"),
    Fragment::Template(|city| format!("Locally owned, serving {city} for years")),
    Fragment::Literal("Non-slip surface options"),
    Fragment::Literal("Upfront, flat-rate pricing"),
    Fragment::Literal("No demolition, no plumbing changes"),
    Fragment::Literal("Ready to use within 24 hours"),
];
