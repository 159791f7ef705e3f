//! Bundled reference catalog.
//!
//! Raw percentages are carried over from the source statistics verbatim,
//! including the overloaded entries (relative-risk figures above 100 and
//! the 38,000 annual-deaths statistic); the risk engine normalizes them.
//! Region ids are regenerated to be globally unique: the source data used
//! `body-model-chest` for both the cardiovascular and respiratory regions.

use crate::models::{BodyRegion, Severity, Symptom, Treatment, TreatmentType};

fn symptom(id: &str, name: &str, severity: Severity, percentage: f64, description: &str) -> Symptom {
    Symptom {
        id: id.into(),
        name: name.into(),
        severity,
        description: description.into(),
        percentage,
    }
}

fn region(id: &str, name: &str, symptoms: Vec<Symptom>) -> BodyRegion {
    BodyRegion {
        id: id.into(),
        name: name.into(),
        symptoms,
    }
}

fn treatment(
    id: &str,
    name: &str,
    kind: TreatmentType,
    severity: Severity,
    description: &str,
    instructions: &str,
    precautions: Option<&str>,
) -> Treatment {
    Treatment {
        id: id.into(),
        name: name.into(),
        kind,
        description: description.into(),
        severity,
        instructions: instructions.into(),
        precautions: precautions.map(Into::into),
    }
}

pub(super) fn bundled_regions() -> Vec<BodyRegion> {
    use Severity::{Moderate, Severe};

    vec![
        region(
            "body-model-head",
            "Head & Brain",
            vec![
                symptom(
                    "memory-issues",
                    "Memory Issues",
                    Moderate,
                    19.0,
                    "Difficulty with memory, concentration, and cognitive function due to poor sleep quality",
                ),
                symptom(
                    "poor-sleep",
                    "Poor Sleep Quality",
                    Severe,
                    19.0,
                    "Fragmented sleep, frequent awakenings, and non-restorative sleep",
                ),
                symptom(
                    "morning-headaches",
                    "Morning Headaches",
                    Moderate,
                    19.0,
                    "Headaches upon waking, often caused by oxygen deprivation during sleep",
                ),
                symptom(
                    "mood-disturbance",
                    "Mood Disturbance",
                    Moderate,
                    19.0,
                    "Depression, anxiety, PTSD, shortened attention span, moodiness and bad temper, poor judgment",
                ),
                symptom(
                    "daytime-sleepiness",
                    "Excessive Daytime Sleepiness",
                    Severe,
                    19.0,
                    "6-fold increase of car accidents, impaired concentration and memory loss, reduced work efficiency, reduced alertness, slower reaction time",
                ),
            ],
        ),
        region(
            "body-model-neck_or_throat",
            "Throat & Airways",
            vec![
                symptom(
                    "loud-snoring",
                    "Loud Snoring",
                    Moderate,
                    70.0,
                    "Affects 50-90% of OSA patients. Relationship discord, morning headaches caused by oxygen deprivation",
                ),
                symptom(
                    "sleep-apnea",
                    "Obstructive Sleep Apnea",
                    Severe,
                    70.0,
                    "Repeated episodes of breathing cessation during sleep, affecting 1 in 5 adult Americans",
                ),
                symptom(
                    "gasping-choking",
                    "Gasping/Choking During Sleep",
                    Severe,
                    80.0,
                    "Sudden awakening with gasping or choking sensations due to airway obstruction",
                ),
            ],
        ),
        region(
            "body-model-heart",
            "Heart & Cardiovascular System",
            vec![
                symptom(
                    "hypertension",
                    "High Blood Pressure (Hypertension)",
                    Severe,
                    41.0,
                    "41% increased risk. Sleep Apnea is an identifiable cause of high blood pressure and leading cause of secondary hypertension",
                ),
                symptom(
                    "coronary-artery-disease",
                    "Coronary Artery Disease",
                    Severe,
                    30.0,
                    "30% increased risk of developing coronary artery disease",
                ),
                symptom(
                    "congestive-heart-failure",
                    "Congestive Heart Failure (CHF)",
                    Severe,
                    140.0,
                    "140% increased risk. Moderate OSA has increased mortality rates",
                ),
                symptom(
                    "stroke-risk",
                    "Stroke Risk",
                    Severe,
                    60.0,
                    "60% increased risk. Men with moderate to severe OSA were nearly 3x more likely to have stroke",
                ),
                symptom(
                    "cardiovascular-death",
                    "Cardiovascular Death Risk",
                    Severe,
                    38000.0,
                    "38,000 cardiovascular deaths annually. OSA sufferers have 30% higher risk of heart attack or premature death",
                ),
            ],
        ),
        region(
            "body-model-upper_abdomen",
            "Upper Digestive System",
            vec![
                symptom(
                    "gerd",
                    "Gastroesophageal Reflux Disease (GERD)",
                    Moderate,
                    18.0,
                    "18% of OSA patients experience GERD, with acid reflux symptoms worsening during sleep",
                ),
                symptom(
                    "high-cholesterol",
                    "High Cholesterol",
                    Moderate,
                    10.0,
                    "10% increased risk of elevated cholesterol levels associated with sleep apnea",
                ),
            ],
        ),
        region(
            "body-model-mid_abdomen",
            "Metabolic System",
            vec![
                symptom(
                    "diabetes-type-2",
                    "Diabetes Type II",
                    Severe,
                    15.0,
                    "15% increased risk. Lack of insulin control and poorly controlled blood sugars",
                ),
                symptom(
                    "obesity",
                    "Obesity",
                    Severe,
                    34.0,
                    "34% correlation. As sleep shortens or diminishes in quality, appetite for high calorie food increases. Obesity is the best documented risk factor for OSA. The prevalence of OSA increases with Body Mass Index (BMI). Approximately 90% of OSA patients weigh 130% or more of their ideal body weight",
                ),
                symptom(
                    "weight-gain",
                    "Unexplained Weight Gain",
                    Moderate,
                    34.0,
                    "Poor sleep quality leads to hormonal changes that increase appetite and weight gain",
                ),
            ],
        ),
        region(
            "body-model-lower_abdomen",
            "Lower Abdomen & Urinary",
            vec![
                symptom(
                    "nocturia",
                    "Nocturia (Frequent Nighttime Urination)",
                    Moderate,
                    40.0,
                    "Frequent urination at night, disrupting sleep patterns and contributing to sleep fragmentation",
                ),
                symptom(
                    "sexual-dysfunction",
                    "Sexual Dysfunction",
                    Moderate,
                    40.0,
                    "40% of OSA patients experience loss of libido and impotence",
                ),
            ],
        ),
        region(
            "body-model-lungs",
            "Respiratory System",
            vec![
                symptom(
                    "asthma",
                    "Asthma",
                    Moderate,
                    4.0,
                    "4% correlation with sleep apnea. OSA can worsen asthma symptoms and vice versa",
                ),
                symptom(
                    "shortness-of-breath",
                    "Shortness of Breath",
                    Moderate,
                    35.0,
                    "Difficulty breathing, especially during physical activity or when lying down",
                ),
            ],
        ),
        region(
            "general",
            "General Health Risks",
            vec![
                symptom(
                    "premature-death",
                    "Increased Death Risk",
                    Severe,
                    2.5,
                    "2.5% more likely risk of death. More than 50% of sudden deaths from Sleep Apnea occur between 10pm and 6am",
                ),
                symptom(
                    "chronic-fatigue",
                    "Chronic Fatigue",
                    Severe,
                    70.0,
                    "Persistent exhaustion despite spending adequate time in bed, due to poor sleep quality",
                ),
                symptom(
                    "reduced-quality-of-life",
                    "Reduced Quality of Life",
                    Moderate,
                    55.0,
                    "Overall decreased life satisfaction due to multiple health complications from untreated sleep apnea",
                ),
            ],
        ),
    ]
}

pub(super) fn bundled_treatments() -> Vec<(String, Vec<Treatment>)> {
    use Severity::{Mild, Moderate, Severe};
    use TreatmentType::{HomeRemedy, Lifestyle, MedicalProcedure, Therapy};

    vec![
        (
            "sleep-apnea".to_string(),
            vec![
                treatment(
                    "cpap-therapy",
                    "CPAP Therapy",
                    MedicalProcedure,
                    Severe,
                    "Continuous Positive Airway Pressure therapy - gold standard treatment for OSA",
                    "Use CPAP machine nightly as prescribed. Maintain consistent sleep schedule and proper mask fit.",
                    Some("Requires prescription and sleep study. Regular follow-up with sleep specialist needed."),
                ),
                treatment(
                    "weight-loss",
                    "Weight Loss Program",
                    Lifestyle,
                    Moderate,
                    "Losing weight can significantly reduce OSA severity",
                    "Aim for 10% body weight reduction through diet and exercise. Consult nutritionist for personalized plan.",
                    Some("Gradual weight loss is safer. Consult healthcare provider before starting any weight loss program."),
                ),
                treatment(
                    "sleep-position",
                    "Positional Therapy",
                    Lifestyle,
                    Mild,
                    "Sleep on your side to reduce airway obstruction",
                    "Use body pillows or positional devices to maintain side sleeping. Elevate head of bed 4-6 inches.",
                    None,
                ),
            ],
        ),
        (
            "loud-snoring".to_string(),
            vec![
                treatment(
                    "nasal-strips",
                    "Nasal Strips/Dilators",
                    HomeRemedy,
                    Mild,
                    "Open nasal passages to improve airflow",
                    "Apply nasal strips before bedtime. Use nasal saline rinse to clear congestion.",
                    None,
                ),
                treatment(
                    "avoid-alcohol",
                    "Avoid Alcohol Before Bed",
                    Lifestyle,
                    Mild,
                    "Alcohol relaxes throat muscles, worsening snoring",
                    "Stop alcohol consumption at least 3 hours before bedtime.",
                    None,
                ),
            ],
        ),
        (
            "hypertension".to_string(),
            vec![
                treatment(
                    "cpap-for-bp",
                    "CPAP for Blood Pressure Control",
                    MedicalProcedure,
                    Severe,
                    "CPAP therapy can help reduce blood pressure in OSA patients",
                    "Use CPAP consistently every night. Monitor blood pressure regularly.",
                    Some("Continue prescribed blood pressure medications unless advised otherwise by physician."),
                ),
                treatment(
                    "dash-diet",
                    "DASH Diet",
                    Lifestyle,
                    Moderate,
                    "Dietary approach to reduce blood pressure",
                    "Reduce sodium intake, increase fruits/vegetables, choose whole grains, limit processed foods.",
                    None,
                ),
            ],
        ),
        (
            "diabetes-type-2".to_string(),
            vec![
                treatment(
                    "sleep-apnea-treatment",
                    "Treat Underlying Sleep Apnea",
                    MedicalProcedure,
                    Severe,
                    "Treating OSA can improve blood sugar control",
                    "Follow prescribed sleep apnea treatment plan. Monitor blood glucose levels regularly.",
                    Some("Work with both sleep specialist and endocrinologist for comprehensive care."),
                ),
                treatment(
                    "blood-sugar-monitoring",
                    "Continuous Glucose Monitoring",
                    MedicalProcedure,
                    Moderate,
                    "Regular monitoring to track blood sugar patterns",
                    "Check blood glucose as prescribed. Keep log of readings and sleep quality.",
                    None,
                ),
            ],
        ),
        (
            "daytime-sleepiness".to_string(),
            vec![
                treatment(
                    "sleep-hygiene",
                    "Sleep Hygiene Improvement",
                    Lifestyle,
                    Moderate,
                    "Optimize sleep environment and habits",
                    "Maintain consistent sleep schedule, dark quiet room, avoid screens before bed, limit caffeine.",
                    None,
                ),
                treatment(
                    "nap-management",
                    "Strategic Napping",
                    Lifestyle,
                    Mild,
                    "Short naps can help manage excessive sleepiness",
                    "Limit naps to 20-30 minutes before 3 PM. Avoid long or late afternoon naps.",
                    Some("Excessive napping may worsen nighttime sleep. Address underlying sleep apnea first."),
                ),
            ],
        ),
        (
            "memory-issues".to_string(),
            vec![
                treatment(
                    "cognitive-rehabilitation",
                    "Cognitive Rehabilitation",
                    Therapy,
                    Moderate,
                    "Exercises to improve memory and concentration",
                    "Practice memory exercises, use organizational tools, maintain regular sleep schedule.",
                    None,
                ),
                treatment(
                    "treat-sleep-apnea-cognitive",
                    "Sleep Apnea Treatment for Cognitive Function",
                    MedicalProcedure,
                    Severe,
                    "Treating OSA often improves cognitive symptoms",
                    "Follow prescribed sleep apnea treatment. Cognitive improvements may take 3-6 months.",
                    None,
                ),
            ],
        ),
        (
            "gerd".to_string(),
            vec![
                treatment(
                    "elevate-head",
                    "Elevate Head of Bed",
                    Lifestyle,
                    Mild,
                    "Reduce acid reflux during sleep",
                    "Raise head of bed 6-8 inches using blocks or wedge pillow. Sleep on left side.",
                    None,
                ),
                treatment(
                    "avoid-late-meals",
                    "Avoid Late Evening Meals",
                    Lifestyle,
                    Mild,
                    "Prevent acid reflux during sleep",
                    "Stop eating 3 hours before bedtime. Avoid spicy, fatty, or acidic foods in evening.",
                    None,
                ),
            ],
        ),
        (
            "obesity".to_string(),
            vec![
                treatment(
                    "comprehensive-weight-program",
                    "Comprehensive Weight Management",
                    Lifestyle,
                    Severe,
                    "Structured approach to weight loss for OSA patients",
                    "Combine diet modification, regular exercise, and behavioral changes. Target 10% weight loss initially.",
                    Some("Work with healthcare team including dietitian. Weight loss surgery may be considered for severe cases."),
                ),
                treatment(
                    "bariatric-surgery",
                    "Bariatric Surgery Evaluation",
                    MedicalProcedure,
                    Severe,
                    "Surgical weight loss option for severe obesity with OSA",
                    "Consult bariatric surgeon for evaluation. Requires comprehensive medical and psychological assessment.",
                    Some("Major surgery with risks. Requires lifelong dietary changes and follow-up."),
                ),
            ],
        ),
        (
            "sexual-dysfunction".to_string(),
            vec![
                treatment(
                    "treat-osa-for-sexual-health",
                    "OSA Treatment for Sexual Function",
                    MedicalProcedure,
                    Moderate,
                    "Treating sleep apnea often improves sexual function",
                    "Follow prescribed sleep apnea treatment consistently. Improvements may take several months.",
                    None,
                ),
                treatment(
                    "lifestyle-sexual-health",
                    "Lifestyle Changes for Sexual Health",
                    Lifestyle,
                    Mild,
                    "Exercise and weight loss can improve sexual function",
                    "Regular exercise, weight management, stress reduction, limit alcohol consumption.",
                    None,
                ),
            ],
        ),
        (
            "nocturia".to_string(),
            vec![
                treatment(
                    "fluid-management",
                    "Fluid Management",
                    Lifestyle,
                    Mild,
                    "Manage fluid intake to reduce nighttime urination",
                    "Limit fluids 2-3 hours before bedtime. Empty bladder before sleep.",
                    None,
                ),
                treatment(
                    "treat-osa-nocturia",
                    "Sleep Apnea Treatment for Nocturia",
                    MedicalProcedure,
                    Moderate,
                    "Treating OSA often reduces nighttime urination",
                    "Follow prescribed sleep apnea treatment. Nocturia improvement may take several weeks.",
                    None,
                ),
            ],
        ),
        (
            "mood-disturbance".to_string(),
            vec![
                treatment(
                    "sleep-apnea-mental-health",
                    "Sleep Apnea Treatment for Mental Health",
                    MedicalProcedure,
                    Severe,
                    "Treating OSA can significantly improve mood and mental health",
                    "Follow prescribed sleep apnea treatment consistently. Consider counseling for additional support.",
                    None,
                ),
                treatment(
                    "stress-management",
                    "Stress Management Techniques",
                    Therapy,
                    Moderate,
                    "Techniques to manage anxiety and mood changes",
                    "Practice relaxation techniques, meditation, regular exercise, maintain social connections.",
                    None,
                ),
            ],
        ),
        (
            "asthma".to_string(),
            vec![treatment(
                "integrated-treatment",
                "Integrated OSA and Asthma Treatment",
                MedicalProcedure,
                Severe,
                "Coordinated treatment of both conditions",
                "Work with both sleep specialist and pulmonologist. Use prescribed inhalers and CPAP as directed.",
                Some("Both conditions can worsen each other if untreated."),
            )],
        ),
        (
            "premature-death".to_string(),
            vec![treatment(
                "comprehensive-osa-treatment",
                "Comprehensive Sleep Apnea Treatment",
                MedicalProcedure,
                Severe,
                "Aggressive treatment of OSA to reduce mortality risk",
                "Follow all prescribed treatments consistently. Regular follow-up with sleep specialist and primary care.",
                Some("Untreated severe OSA significantly increases risk of sudden death, especially between 10 PM and 6 AM."),
            )],
        ),
    ]
}
