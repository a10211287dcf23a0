//! Doctor reference table

use serde::Serialize;

/// A doctor who can be recommended for one or more diseases
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Doctor {
    pub name: &'static str,
    pub specialty: &'static str,
    /// Disease labels this doctor treats
    pub diseases: &'static [&'static str],
    pub location: &'static str,
    pub contact: &'static str,
    pub rating: f64,
}

impl Doctor {
    /// Whether the doctor treats the given disease label
    #[must_use]
    pub fn treats(&self, disease: &str) -> bool {
        self.diseases.contains(&disease)
    }
}

/// Doctors in table order; ties in rating keep this order
pub static DOCTORS: [Doctor; 13] = [
    Doctor {
        name: "Dr. Sarah Johnson",
        specialty: "General Physician",
        diseases: &["Common Cold", "Influenza", "COVID-19", "Anemia", "Gastroenteritis", "Pneumonia", "Typhoid", "Malaria"],
        location: "Central Care Hospital, New York",
        contact: "+1-555-0101",
        rating: 4.8,
    },
    Doctor {
        name: "Dr. Michael Chen",
        specialty: "Endocrinologist",
        diseases: &["Diabetes", "Hyperthyroidism", "Hypothyroidism"],
        location: "Wellness Endocrine Center, Brooklyn",
        contact: "+1-555-0102",
        rating: 4.9,
    },
    Doctor {
        name: "Dr. Emily Rodriguez",
        specialty: "Cardiologist",
        diseases: &["Hypertension"],
        location: "Heart & Vascular Institute, Manhattan",
        contact: "+1-555-0103",
        rating: 4.7,
    },
    Doctor {
        name: "Dr. James Wilson",
        specialty: "Pulmonologist",
        diseases: &["Asthma", "COVID-19", "Pneumonia", "Tuberculosis"],
        location: "Lungs & Breath Center, Queens",
        contact: "+1-555-0104",
        rating: 4.6,
    },
    Doctor {
        name: "Dr. Lisa Wang",
        specialty: "Rheumatologist",
        diseases: &["Arthritis", "Gout"],
        location: "Joint Health Clinic, Bronx",
        contact: "+1-555-0105",
        rating: 4.8,
    },
    Doctor {
        name: "Dr. Robert Taylor",
        specialty: "Psychiatrist",
        diseases: &["Depression", "Anxiety Disorder"],
        location: "Mind Matters Institute, Manhattan",
        contact: "+1-555-0106",
        rating: 4.9,
    },
    Doctor {
        name: "Dr. Anita Desai",
        specialty: "Neurologist",
        diseases: &["Migraine"],
        location: "NeuroScience Hub, Jersey City",
        contact: "+1-555-0107",
        rating: 4.7,
    },
    Doctor {
        name: "Dr. Kevin Miller",
        specialty: "Urologist",
        diseases: &["Urinary Tract Infection"],
        location: "Urology Specialists, Staten Island",
        contact: "+1-555-0108",
        rating: 4.5,
    },
    Doctor {
        name: "Dr. David Brooks",
        specialty: "Infectious Disease Specialist",
        diseases: &["Tuberculosis", "Dengue", "Malaria", "Typhoid", "Hepatitis"],
        location: "City Infection Control, Queens",
        contact: "+1-555-0109",
        rating: 4.9,
    },
    Doctor {
        name: "Dr. Sophia Martinez",
        specialty: "Hepatologist",
        diseases: &["Hepatitis"],
        location: "Liver & Digest Clinic, Brooklyn",
        contact: "+1-555-0110",
        rating: 4.7,
    },
    Doctor {
        name: "Dr. Richard Black",
        specialty: "Nephrologist",
        diseases: &["Chronic Kidney Disease"],
        location: "Renal Care Center, Manhattan",
        contact: "+1-555-0111",
        rating: 4.8,
    },
    Doctor {
        name: "Dr. Elena Gilbert",
        specialty: "Gastroenterologist",
        diseases: &["GERD", "Gastroenteritis"],
        location: "GI Health Institute, Staten Island",
        contact: "+1-555-0112",
        rating: 4.6,
    },
    Doctor {
        name: "Dr. Marcus Thorne",
        specialty: "Dermatologist",
        diseases: &["Psoriasis"],
        location: "Skin & Aesthetic Hub, Manhattan",
        contact: "+1-555-0113",
        rating: 4.8,
    },
];
