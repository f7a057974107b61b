use historico::extract::NOT_TAKEN;
use historico::{extract, load_weekday_map, Advisory, ExtractError, WeekdayMap};

const HISTORICO: &str = include_str!("data/historico_exemplo.txt");
const HORARIOS: &str = include_str!("data/h20251.txt");

#[test]
fn test_extract_historico_completo() {
    let weekdays = load_weekday_map(HORARIOS);
    let res = extract(HISTORICO, &weekdays).expect("El histórico debe extraerse");

    let s = &res.student;
    assert_eq!(s.name, "Maria da Silva");
    assert_eq!(s.email, "maria.silva@aluno.edu.br");
    assert_eq!(s.status, "Ativo");
    assert_eq!(s.registration_number, "202100012345");
    assert_eq!(s.shift, "Administração - Noturno");
    assert_eq!(s.course_duration_semesters, Some(8));
    assert_eq!(s.curriculum_year.as_deref(), Some("2019"));
    assert_eq!(s.current_period, Some(5));

    let cursos: Vec<(&str, u8, &str, Option<&str>)> = res
        .courses
        .iter()
        .map(|c| (c.code.as_str(), c.semester, c.status.as_str(), c.weekday.as_deref()))
        .collect();
    assert_eq!(
        cursos,
        vec![
            ("ADM1001", 1, "Aprovado", Some("Segunda")),
            ("MAT1001", 1, "Dispensado", Some("Terça")),
            ("CTB2001", 2, NOT_TAKEN, Some("Quarta")),
            ("ECO2001", 2, "Aprovado", Some("Quinta")),
            ("EST3001", 3, NOT_TAKEN, Some("Sexta")),
            ("ADM4001", 4, NOT_TAKEN, None),
        ]
    );
    assert_eq!(res.courses[0].name, "Introdução à Administração");

    let optativas: Vec<(&str, &str, &str)> = res
        .electives
        .iter()
        .map(|e| (e.name.as_str(), e.code.as_str(), e.status.as_str()))
        .collect();
    assert_eq!(
        optativas,
        vec![
            ("Economia Brasileira", "ECO2010", "Aprovado"),
            ("Sociologia", "SOC1000", "Aprovado"),
            ("Direito Empresarial", "DIR1000", "Reprovado"),
        ]
    );
    assert_eq!(res.electives[0].weekday.as_deref(), Some("Segunda"));

    assert_eq!(
        res.advisories,
        vec![Advisory::WeekdaysNotFound {
            codes: vec!["ADM4001".to_string(), "SOC1000".to_string(), "DIR1000".to_string()]
        }]
    );
}

#[test]
fn test_extract_es_idempotente() {
    let weekdays = load_weekday_map(HORARIOS);
    let a = extract(HISTORICO, &weekdays).unwrap();
    let b = extract(HISTORICO, &weekdays).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_extract_vacio_falla() {
    assert_eq!(extract("", &WeekdayMap::new()), Err(ExtractError::EmptyInput));
}

#[test]
fn test_extract_sin_mapa_de_dias() {
    let res = extract(HISTORICO, &WeekdayMap::new()).unwrap();
    assert_eq!(res.courses.len(), 6);
    assert!(res.courses.iter().all(|c| c.weekday.is_none()));
    assert!(res.electives.iter().all(|e| e.weekday.is_none()));
    assert_eq!(res.advisories, vec![Advisory::MissingReferenceData]);
}

#[test]
fn test_extract_solo_perfil() {
    let text = "Ana Souza\nana@uni.br\nPeríodo Atual\n3";
    let res = extract(text, &WeekdayMap::new()).unwrap();
    assert_eq!(res.student.name, "Ana Souza");
    assert_eq!(res.student.current_period, Some(3));
    assert!(res.courses.is_empty());
    assert!(res.electives.is_empty());
    assert_eq!(res.advisories, vec![Advisory::NoCoursesFound, Advisory::NoElectivesFound]);
}

#[test]
fn test_extract_crlf() {
    let text = "5\r\nGestão\r\nADM1011\r\nAprovado\r\n";
    let res = extract(text, &WeekdayMap::new()).unwrap();
    assert_eq!(res.courses.len(), 1);
    assert_eq!(res.courses[0].name, "Gestão");
    assert_eq!(res.courses[0].status, "Aprovado");
}
