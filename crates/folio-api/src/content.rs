//! Portfolio content served by the read-only endpoints.

use folio_types::{Experience, Testimonial};

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial::new(
            "Dr. A. N. Mentor",
            "R&D Director, TechLabs",
            "Girish transforms ambiguous engineering challenges into elegant, manufacturable designs.",
        ),
        Testimonial::new(
            "Priya S.",
            "Program Manager, AeroWorks",
            "Rare balance of deep engineering rigor and product sense.",
        ),
    ]
}

pub fn experience() -> Vec<Experience> {
    vec![
        Experience::new("InnovateX", "Senior Design Engineer", "2019", "Present").with_highlights([
            "Led cross-functional design sprints for automation systems",
            "Cut prototype cycles by 35% using modular CAD libraries",
            "Filed 3 patents in mechatronic assemblies",
        ]),
        Experience::new("AeroWorks", "Mechanical Engineer", "2016", "2019").with_highlights([
            "Developed finite element models for composite structures",
            "Implemented DFMA to reduce BOM by 18%",
            "Mentored new grads on CAD best practices",
        ]),
    ]
}
