//! Disease guidance reference table

use serde::Serialize;

/// Care guidance for a disease
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiseaseInfo {
    pub description: &'static str,
    /// Recommended actions, most important first
    pub actions: &'static [&'static str],
    pub precautions: &'static [&'static str],
    pub urgency: &'static str,
}

/// Returned for any disease without an entry
pub static FALLBACK_INFO: DiseaseInfo = DiseaseInfo {
    description: "Information not available.",
    actions: &["Consult a doctor"],
    precautions: &["General health maintenance"],
    urgency: "Unknown",
};

/// Guidance keyed by disease label
pub static DISEASE_KNOWLEDGE: [(&str, DiseaseInfo); 27] = [
    (
        "Common Cold",
        DiseaseInfo {
            description: "A viral infection of your nose and throat (upper respiratory tract). It's usually harmless.",
            actions: &["Rest adequately", "Stay hydrated", "Use saline nasal drops"],
            precautions: &["Wash hands frequently", "Avoid close contact with others"],
            urgency: "Low",
        },
    ),
    (
        "Influenza",
        DiseaseInfo {
            description: "A viral infection that attacks your respiratory system — your nose, throat and lungs.",
            actions: &["Rest", "Drink plenty of fluids", "Antiviral drugs if prescribed"],
            precautions: &["Annual flu vaccine", "Cover coughs and sneezes"],
            urgency: "Medium",
        },
    ),
    (
        "COVID-19",
        DiseaseInfo {
            description: "An infectious disease caused by the SARS-CoV-2 virus.",
            actions: &["Isolate yourself", "Monitor oxygen levels", "Stay hydrated"],
            precautions: &["Wear a mask", "Social distancing", "Vaccination"],
            urgency: "High",
        },
    ),
    (
        "Diabetes",
        DiseaseInfo {
            description: "A group of diseases that result in too much sugar in the blood (high blood glucose).",
            actions: &["Monitor blood sugar levels", "Maintain a healthy diet", "Regular exercise"],
            precautions: &["Limit sugary foods", "Weight management", "Regular check-ups"],
            urgency: "Medium",
        },
    ),
    (
        "Hypertension",
        DiseaseInfo {
            description: "A condition in which the force of the blood against the artery walls is too high.",
            actions: &["Reduce salt intake", "Exercise regularly", "Monitor BP at home"],
            precautions: &["Reduce stress", "Limit alcohol", "Heart-healthy diet"],
            urgency: "Medium",
        },
    ),
    (
        "Anemia",
        DiseaseInfo {
            description: "A condition in which you lack enough healthy red blood cells to carry adequate oxygen to your tissues.",
            actions: &["Iron-rich diet (spinach, red meat)", "Vitamin C intake", "Iron supplements if recommended"],
            precautions: &["Regular blood tests", "Consult a doctor for underlying causes"],
            urgency: "Medium",
        },
    ),
    (
        "Gastroenteritis",
        DiseaseInfo {
            description: "An intestinal infection marked by diarrhea, cramps, nausea, vomiting and fever.",
            actions: &["Stay hydrated (ORS)", "Bland diet (BRAT)", "Rest"],
            precautions: &["Wash hands after using the bathroom", "Avoid contaminated food/water"],
            urgency: "Medium",
        },
    ),
    (
        "Asthma",
        DiseaseInfo {
            description: "A condition in which your airways narrow and swell and may produce extra mucus.",
            actions: &["Identify and avoid triggers", "Use inhaler as prescribed", "Breathing exercises"],
            precautions: &["Carry rescue inhaler always", "Regular pulmonary check-ups"],
            urgency: "High (during attacks)",
        },
    ),
    (
        "Arthritis",
        DiseaseInfo {
            description: "The swelling and tenderness of one or more of your joints.",
            actions: &["Low-impact exercise", "Hot/cold therapy", "Weight management"],
            precautions: &["Protect your joints", "Avoid repetitive strain"],
            urgency: "Low",
        },
    ),
    (
        "Depression",
        DiseaseInfo {
            description: "A mood disorder that causes a persistent feeling of sadness and loss of interest.",
            actions: &["Reach out to friends/family", "Stick to a routine", "Professional counseling"],
            precautions: &["Avoid alcohol", "Prioritize sleep", "Exercise"],
            urgency: "Medium to High",
        },
    ),
    (
        "Anxiety Disorder",
        DiseaseInfo {
            description: "A mental health disorder characterized by feelings of worry, anxiety or fear that are strong enough to interfere with one's daily activities.",
            actions: &["Deep breathing techniques", "Mindfulness/Meditation", "Limit caffeine"],
            precautions: &["Adequate sleep", "Exercise", "Avoid known stressors"],
            urgency: "Medium",
        },
    ),
    (
        "Migraine",
        DiseaseInfo {
            description: "A headache that can cause severe throbbing pain or a pulsing sensation, usually on one side of the head.",
            actions: &["Rest in a dark, quiet room", "Apply cold compress", "Identify food triggers"],
            precautions: &["Regular sleep schedule", "Stay hydrated", "Stress management"],
            urgency: "Medium",
        },
    ),
    (
        "Pneumonia",
        DiseaseInfo {
            description: "An infection that inflames the air sacs in one or both lungs.",
            actions: &["Take prescribed antibiotics/antivirals", "Control fever", "Rest"],
            precautions: &["Pneumococcal vaccine", "Avoid smoking", "Hand hygiene"],
            urgency: "High",
        },
    ),
    (
        "Urinary Tract Infection",
        DiseaseInfo {
            description: "An infection in any part of your urinary system — your kidneys, ureters, bladder and urethra.",
            actions: &["Drink plenty of water", "Cranberry juice (unsweetened)", "Complete antibiotic course"],
            precautions: &["Wipe front to back", "Urinate after intercourse"],
            urgency: "Medium",
        },
    ),
    (
        "Hyperthyroidism",
        DiseaseInfo {
            description: "A condition in which the thyroid gland is overactive and makes too much thyroid hormone.",
            actions: &["Follow medication plan", "Monitor weight", "Reduce iodine intake if advised"],
            precautions: &["Regular thyroid level tests", "Manage stress"],
            urgency: "Medium",
        },
    ),
    (
        "Vitamin D Deficiency",
        DiseaseInfo {
            description: "A common condition where the body has insufficient levels of Vitamin D.",
            actions: &["Safe sun exposure", "Vitamin D rich foods (fatty fish, eggs)", "Supplements"],
            precautions: &["Check Vitamin D levels annually"],
            urgency: "Low",
        },
    ),
    (
        "Lyme Disease",
        DiseaseInfo {
            description: "A tick-borne illness caused by the bacterium Borrelia burgdorferi.",
            actions: &["Antibiotic treatment", "Rest", "Monitor for rash"],
            precautions: &["Use tick repellent", "Wear long sleeves in wooded areas"],
            urgency: "Medium",
        },
    ),
    (
        "Tuberculosis",
        DiseaseInfo {
            description: "A potentially serious infectious disease that mainly affects your lungs.",
            actions: &["Complete the full course of therapy", "Isolate during initial phase", "Cough etiquette"],
            precautions: &["BCG vaccination", "Avoid crowded places if infected", "Proper ventilation"],
            urgency: "High",
        },
    ),
    (
        "Dengue",
        DiseaseInfo {
            description: "A mosquito-borne viral disease that causes sudden high fever and severe joint pain.",
            actions: &["Hydration (Plenty of fluids)", "Rest", "Acetaminophen for pain (avoid Aspirin/Ibuprofen)"],
            precautions: &["Use mosquito nets/repellents", "Eliminate stagnant water", "Wear protective clothing"],
            urgency: "High",
        },
    ),
    (
        "Malaria",
        DiseaseInfo {
            description: "A serious and sometimes fatal disease caused by a parasite that commonly infects a certain type of mosquito.",
            actions: &["Anti-malarial medication", "Monitor for complications", "Rest"],
            precautions: &["Mosquito control", "Prophylactic medication if traveling"],
            urgency: "High",
        },
    ),
    (
        "Typhoid",
        DiseaseInfo {
            description: "A bacterial infection caused by Salmonella typhi, usually through contaminated food or water.",
            actions: &["Antibiotic course", "Oral rehydration therapy", "Light, easy-to-digest food"],
            precautions: &["Drink boiled/bottled water", "Hand hygiene", "Typhoid vaccine"],
            urgency: "High",
        },
    ),
    (
        "Hepatitis",
        DiseaseInfo {
            description: "Inflammation of the liver, often caused by a viral infection.",
            actions: &["Rest", "Avoid alcohol/liver-toxic drugs", "Follow specific therapy for Type (A, B, C)"],
            precautions: &["Hepatitis vaccines (A & B)", "Safe food and water", "Sanitary practices"],
            urgency: "High",
        },
    ),
    (
        "Chronic Kidney Disease",
        DiseaseInfo {
            description: "Long-term condition where the kidneys don't work as well as they should.",
            actions: &["Control blood pressure and sugar", "Reduced salt and protein diet", "Regular screenings"],
            precautions: &["Avoid NSAIDs (like Ibuprofen)", "Weight management", "Limit alcohol"],
            urgency: "High/Ongoing",
        },
    ),
    (
        "GERD",
        DiseaseInfo {
            description: "Gastroesophageal reflux disease occurs when stomach acid frequently flows back into the tube connecting your mouth and stomach (esophagus).",
            actions: &["Eat smaller meals", "Avoid lying down after meals", "Identify trigger foods (spicy, acidic)"],
            precautions: &["Raise head of bed", "Weight loss", "Stop smoking"],
            urgency: "Low to Medium",
        },
    ),
    (
        "Psoriasis",
        DiseaseInfo {
            description: "A skin disease that causes red, itchy scaly patches, most commonly on the knees, elbows, trunk and scalp.",
            actions: &["Apply prescribed topical creams", "Moisturize regularly", "Brief sun exposure"],
            precautions: &["Avoid skin injuries", "Manage stress", "Avoid triggers like alcohol"],
            urgency: "Low",
        },
    ),
    (
        "Gout",
        DiseaseInfo {
            description: "A common and complex form of arthritis that can affect anyone, characterized by sudden, severe attacks of pain, swelling, redness and tenderness in one or more joints.",
            actions: &["Apply ice to the joint", "Drink plenty of water", "Rest and elevate the joint"],
            precautions: &["Low-purine diet (avoid red meat, seafood)", "Limit alcohol", "Weight management"],
            urgency: "Medium",
        },
    ),
    (
        "Hypothyroidism",
        DiseaseInfo {
            description: "A condition in which your thyroid gland doesn't produce enough of certain crucial hormones.",
            actions: &["Take daily thyroid hormone replacement", "Optimal iodine intake", "Regular blood tests"],
            precautions: &["Monitor for dose adjustments", "Healthy diet"],
            urgency: "Medium",
        },
    ),
];
