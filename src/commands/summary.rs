// Summary commands
// Lesson import: extract text from the picked file, have Gemini condense
// it, and only then create the lesson. A failed summary creates nothing.

use log::{info, warn};
use tauri::State;

use crate::commands::store::StoreState;
use crate::models::{Lesson, LessonKind};
use crate::services::summary::SummaryService;
use crate::utils;

/// Summary service plus the guard that rejects overlapping imports.
pub struct SummaryState {
    service: SummaryService,
    import_guard: tokio::sync::Mutex<()>,
}

impl SummaryState {
    pub fn new() -> Self {
        Self {
            service: SummaryService::new(),
            import_guard: tokio::sync::Mutex::new(()),
        }
    }
}

impl Default for SummaryState {
    fn default() -> Self {
        Self::new()
    }
}

/// Lesson fields derived from the import kind, plus the extracted text.
struct Extraction {
    text: &'static str,
    title: String,
    subject: &'static str,
    color: &'static str,
}

/// Text extraction per source kind. Real OCR/transcription is out of
/// scope; each kind yields a representative study passage, as in the demo
/// data the app ships with.
fn extract(file_name: &str, kind: LessonKind) -> Option<Extraction> {
    match kind {
        LessonKind::Pdf => Some(Extraction {
            text: "La thermodynamique est la branche de la physique qui traite de la chaleur, du travail et de la température, et de leur relation avec l'énergie, le rayonnement et les propriétés physiques de la matière. Le comportement de ces grandeurs est régi par les quatre lois de la thermodynamique qui véhiculent une description quantitative à l'aide de grandeurs macroscopiques mesurables, mais peuvent être expliquées en termes de constituants microscopiques par la mécanique statistique. La thermodynamique s'applique à une grande variété de sujets en science et en ingénierie, en particulier la chimie physique, le génie chimique et le génie mécanique, mais aussi dans des domaines aussi complexes que la météorologie.",
            title: format!("Résumé de: {}", file_name),
            subject: "Physique",
            color: "#3B82F6",
        }),
        LessonKind::Image => Some(Extraction {
            text: "La photosynthèse est le processus utilisé par les plantes, les algues et certaines bactéries pour convertir l'énergie lumineuse en énergie chimique, à travers un processus qui convertit le dioxyde de carbone et l'eau en glucose (sucre) et en oxygène. C'est un processus fondamental pour la vie sur Terre car il produit l'oxygène que nous respirons et constitue la base de la plupart des chaînes alimentaires. Les chloroplastes dans les cellules végétales sont le site de la photosynthèse.",
            title: format!("Notes de: {}", file_name),
            subject: "Biologie",
            color: "#10B981",
        }),
        LessonKind::Audio => Some(Extraction {
            text: "L'histoire de la Révolution française couvre la période allant de l'ouverture des États généraux, le 5 mai 1789, au coup d'État du 18 brumaire de Napoléon Bonaparte, le 9 novembre 1799. C'est un moment crucial de l'histoire de France, marquant la fin de l'Ancien Régime, et le remplacement de la monarchie absolue par une série de régimes plus démocratiques, bien que souvent instables. La Déclaration des droits de l'homme et du citoyen, proclamée en août 1789, est l'un des textes fondamentaux de cette période.",
            title: format!("Transcription de: {}", file_name),
            subject: "Histoire",
            color: "#F59E0B",
        }),
        // Free text goes through manual lesson creation, not the importer.
        LessonKind::Text => None,
    }
}

/// Summarize arbitrary text without creating anything.
#[tauri::command]
pub async fn generate_summary(
    text: String,
    state: State<'_, SummaryState>,
) -> Result<String, String> {
    state.service.summarize(&text).await.map_err(|e| e.to_string())
}

/// Full import flow for a picked file. At most one import runs at a time;
/// a second call while one is pending is rejected rather than queued.
#[tauri::command]
pub async fn import_lesson(
    file_name: String,
    kind: LessonKind,
    summary_state: State<'_, SummaryState>,
    store_state: State<'_, StoreState>,
) -> Result<Lesson, String> {
    let _guard = summary_state.import_guard.try_lock().map_err(|_| {
        warn!("import: rejected, another import is pending");
        "Un import de leçon est déjà en cours. Veuillez patienter.".to_string()
    })?;

    let extraction = extract(&file_name, kind)
        .ok_or_else(|| "Import texte non pris en charge: utilisez la création manuelle.".to_string())?;

    // The store stays untouched until the summary is in hand.
    let summary = summary_state
        .service
        .summarize(extraction.text)
        .await
        .map_err(|e| e.to_string())?;

    let lesson = Lesson {
        id: utils::new_id(),
        title: extraction.title,
        subject: extraction.subject.to_string(),
        color: extraction.color.to_string(),
        date: utils::now_iso(),
        summary,
        kind,
        content: Some(extraction.text.to_string()),
    };

    let mut store = store_state.0.lock().map_err(|e| e.to_string())?;
    store.add_lesson(lesson.clone());
    info!("import: lesson {} created from {:?} {}", lesson.id, kind, file_name);
    Ok(lesson)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_import_kind_maps_to_its_subject() {
        let pdf = extract("cours.pdf", LessonKind::Pdf).unwrap();
        assert_eq!(pdf.title, "Résumé de: cours.pdf");
        assert_eq!(pdf.subject, "Physique");

        let image = extract("photo.jpg", LessonKind::Image).unwrap();
        assert_eq!(image.title, "Notes de: photo.jpg");
        assert_eq!(image.subject, "Biologie");

        let audio = extract("cours.m4a", LessonKind::Audio).unwrap();
        assert_eq!(audio.title, "Transcription de: cours.m4a");
        assert_eq!(audio.subject, "Histoire");
    }

    #[test]
    fn free_text_is_not_importable() {
        assert!(extract("note.txt", LessonKind::Text).is_none());
    }

    #[tokio::test]
    async fn a_pending_import_blocks_a_second_one() {
        let state = SummaryState::new();

        let held = state.import_guard.try_lock().expect("first import");
        assert!(state.import_guard.try_lock().is_err(), "overlap must be rejected");

        drop(held);
        assert!(state.import_guard.try_lock().is_ok(), "freed after completion");
    }
}
